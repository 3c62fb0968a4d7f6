//! Wizard session: the single owner of the current configuration snapshot.
//!
//! Front ends hold one `Session` and route every edit through [`Session::apply`],
//! which swaps in a new snapshot. Nothing else keeps mutable wizard state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compile::{build_with_clock, Clock};
use crate::export::{suggested_file_name, ExportReceipt, ExportResult, Exporter, SaveTarget};
use crate::model::{DataSource, ProjectConfig, ProjectDocument};

/// Kind of data file a user attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadKind {
    Excel,
    Csv,
    Database,
}

/// A data file the user attached to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub kind: UploadKind,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, kind: UploadKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: ProjectConfig,
    uploads: Vec<UploadedFile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            config,
            uploads: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn uploads(&self) -> &[UploadedFile] {
        &self.uploads
    }

    /// Replace the snapshot with `edit(current)`.
    pub fn apply<F>(&mut self, edit: F)
    where
        F: FnOnce(&ProjectConfig) -> ProjectConfig,
    {
        self.config = edit(&self.config);
    }

    /// Attach a data file. An Excel upload switches the data source to Excel.
    pub fn upload(&mut self, file: UploadedFile) {
        if file.kind == UploadKind::Excel && self.config.data_source != DataSource::Excel {
            debug!(file = %file.name, "Excel upload switches data source to Excel");
            self.apply(|c| c.with_data_source(DataSource::Excel));
        }
        self.uploads.push(file);
    }

    /// Forget the upload at `index`, if any.
    pub fn remove_upload(&mut self, index: usize) -> Option<UploadedFile> {
        (index < self.uploads.len()).then(|| self.uploads.remove(index))
    }

    /// Build a document from the current snapshot.
    pub fn build(&self, clock: &dyn Clock) -> ProjectDocument {
        build_with_clock(&self.config, clock)
    }

    /// Build and export the current snapshot under its suggested file name.
    pub fn export<T: SaveTarget>(
        &self,
        exporter: &Exporter<T>,
        extension: &str,
        clock: &dyn Clock,
    ) -> ExportResult<ExportReceipt> {
        let document = self.build(clock);
        exporter.export(&document, &suggested_file_name(&self.config, extension))
    }
}
