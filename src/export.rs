//! Serialize a project document and hand it to the host's save mechanism.
//!
//! The host is abstracted as a [`SaveTarget`]. A target hands out a scoped
//! [`SaveHandle`] per export; the handle is released when it goes out of
//! scope, and an uncommitted handle discards whatever was written.
//!
//! Export is attempted exactly once. Failures are reported to the caller and
//! never retried here.

use std::cell::RefCell;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::{ProjectConfig, ProjectDocument};

/// File stem used when the project has no name.
pub const DEFAULT_FILE_STEM: &str = "projeto-powerbi";

/// Default extension of exported documents.
pub const DEFAULT_EXTENSION: &str = "pbix";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Save environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write document: {0}")]
    Io(#[from] io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub bytes: usize,
}

/// Suggested file name: `<projectName or "projeto-powerbi">.<extension>`.
///
/// Path separators in the project name are replaced with `_`, so the result
/// is always a bare file name.
pub fn suggested_file_name(config: &ProjectConfig, extension: &str) -> String {
    let stem = if config.project_name.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        config.project_name.replace(['/', '\\'], "_")
    };
    format!("{}.{}", stem, extension)
}

/// A file name is saveable only when it is exactly one normal path component.
fn is_bare_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !file_name.contains(['/', '\\'])
}

/// Serialize a document as JSON. Key order follows the document's field order.
pub fn to_json(document: &ProjectDocument, pretty: bool) -> ExportResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

// ============================================================================
// Save targets
// ============================================================================

/// The host environment's "save as file" mechanism.
pub trait SaveTarget {
    /// Acquire a handle for saving `file_name`.
    fn acquire(&self, file_name: &str) -> ExportResult<Box<dyn SaveHandle + '_>>;
}

/// A transient, single-use handle for one saved file.
pub trait SaveHandle {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Finish the save. Dropping a handle without committing discards it.
    fn commit(self: Box<Self>) -> io::Result<()>;
}

/// Saves files into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory.
    pub fn downloads() -> ExportResult<Self> {
        dirs::download_dir().map(Self::new).ok_or_else(|| {
            ExportError::EnvironmentUnavailable("no download directory on this host".to_string())
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn acquire(&self, file_name: &str) -> ExportResult<Box<dyn SaveHandle + '_>> {
        if !self.dir.is_dir() {
            return Err(ExportError::EnvironmentUnavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        if !is_bare_file_name(file_name) {
            return Err(ExportError::EnvironmentUnavailable(format!(
                "'{}' is not a plain file name",
                file_name
            )));
        }

        // Stage next to the destination; an existing file is only replaced on commit
        let staged = NamedTempFile::new_in(&self.dir)?;
        let path = self.dir.join(file_name);
        debug!(path = %path.display(), staged = %staged.path().display(), "Acquired file handle");

        Ok(Box::new(FileHandle {
            writer: Some(BufWriter::new(staged)),
            path,
        }))
    }
}

struct FileHandle {
    writer: Option<BufWriter<NamedTempFile>>,
    path: PathBuf,
}

impl SaveHandle for FileHandle {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(w) => w.write_all(bytes),
            None => Err(io::Error::other("handle already released")),
        }
    }

    fn commit(mut self: Box<Self>) -> io::Result<()> {
        if let Some(writer) = self.writer.take() {
            let staged = writer.into_inner().map_err(|e| e.into_error())?;
            staged.as_file().sync_all()?;
            staged.persist(&self.path).map_err(|e| e.error)?;
        }
        Ok(())
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        // The staged file deletes itself when dropped
        if self.writer.take().is_some() {
            debug!(path = %self.path.display(), "Discarded uncommitted save");
        }
    }
}

/// A file captured by [`MemoryTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

/// Collects saved files in memory. Used by embedders and tests.
#[derive(Debug)]
pub struct MemoryTarget {
    available: bool,
    saved: RefCell<Vec<SavedFile>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self {
            available: true,
            saved: RefCell::new(Vec::new()),
        }
    }

    /// A target whose host cannot save files.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            saved: RefCell::new(Vec::new()),
        }
    }

    pub fn saved(&self) -> Vec<SavedFile> {
        self.saved.borrow().clone()
    }
}

impl Default for MemoryTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveTarget for MemoryTarget {
    fn acquire(&self, file_name: &str) -> ExportResult<Box<dyn SaveHandle + '_>> {
        if !self.available {
            return Err(ExportError::EnvironmentUnavailable(
                "in-memory target disabled".to_string(),
            ));
        }
        Ok(Box::new(MemoryHandle {
            target: self,
            name: file_name.to_string(),
            buffer: Vec::new(),
        }))
    }
}

struct MemoryHandle<'a> {
    target: &'a MemoryTarget,
    name: String,
    buffer: Vec<u8>,
}

impl SaveHandle for MemoryHandle<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    fn commit(self: Box<Self>) -> io::Result<()> {
        let MemoryHandle {
            target,
            name,
            buffer,
        } = *self;
        target.saved.borrow_mut().push(SavedFile {
            name,
            contents: buffer,
        });
        Ok(())
    }
}

// ============================================================================
// Exporter
// ============================================================================

/// Serializes documents and saves them through a [`SaveTarget`].
#[derive(Debug)]
pub struct Exporter<T> {
    target: T,
    pretty: bool,
}

impl<T: SaveTarget> Exporter<T> {
    /// Exporter writing pretty-printed JSON.
    pub fn new(target: T) -> Self {
        Self {
            target,
            pretty: true,
        }
    }

    /// Write single-line JSON instead.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Save `document` as `file_name`.
    pub fn export(
        &self,
        document: &ProjectDocument,
        file_name: &str,
    ) -> ExportResult<ExportReceipt> {
        match self.try_export(document, file_name) {
            Ok(receipt) => {
                info!(file = %receipt.file_name, bytes = receipt.bytes, "Exported project document");
                Ok(receipt)
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "Export failed");
                Err(e)
            }
        }
    }

    fn try_export(
        &self,
        document: &ProjectDocument,
        file_name: &str,
    ) -> ExportResult<ExportReceipt> {
        let json = to_json(document, self.pretty)?;

        let mut handle = self.target.acquire(file_name)?;
        handle.write(json.as_bytes())?;
        handle.commit()?;

        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            bytes: json.len(),
        })
    }
}
