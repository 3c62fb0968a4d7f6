//! End-to-end compilation from a configuration snapshot to a project document.
//!
//! ```text
//! ProjectConfig ─┬─ derive_schema    → tables, relationships
//!                ├─ compile_measures → measures
//!                ├─ calculations     → dashboard calculations
//!                └─ plan_pages       → pages + layout
//!                          │
//!                          ▼
//!                  ProjectDocument (+ connection template, metadata)
//! ```
//!
//! # Example
//!
//! ```
//! use pbiforge::compile::{build_with_clock, FixedClock};
//! use pbiforge::model::ProjectConfig;
//!
//! let config = ProjectConfig::new()
//!     .with_project_name("Sales")
//!     .with_dimension("Date")
//!     .with_measure("Vendas");
//!
//! let doc = build_with_clock(&config, &FixedClock::epoch());
//! assert_eq!(doc.model.measures[0].formula, "Vendas = SUM(FactDados[Vendas])");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::derive::{compile_measures, derive_calculations, derive_schema, layout_for, plan_pages};
use crate::model::document::{DOCUMENT_VERSION, GENERATOR_ID, NOMINAL_FILE_SIZE};
use crate::model::{
    DataSourceSection, Metadata, ModelSection, ProjectConfig, ProjectDocument, Report,
};

// ============================================================================
// Clock
// ============================================================================

/// Source of the document creation timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for reproducible builds.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Frozen at the Unix epoch.
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// Build
// ============================================================================

/// Build a document stamped with the current time.
pub fn build(config: &ProjectConfig) -> ProjectDocument {
    build_with_clock(config, &SystemClock)
}

/// Build a document stamped by `clock`.
///
/// Never fails: empty lists simply produce an empty model.
pub fn build_with_clock(config: &ProjectConfig, clock: &dyn Clock) -> ProjectDocument {
    let schema = derive_schema(config);

    let model = ModelSection {
        tables: schema.tables,
        relationships: schema.relationships,
        measures: compile_measures(&config.measures),
        calculations: derive_calculations(config),
    };

    let report = Report {
        pages: plan_pages(config),
        theme: config.theme,
        layout: layout_for(config.report_type),
    };

    let document = ProjectDocument {
        version: DOCUMENT_VERSION.to_string(),
        config: config.clone(),
        name: config.project_name.clone(),
        description: config.description.clone(),
        data_source: DataSourceSection {
            kind: config.data_source,
            connection_string: config.data_source.connection_template().to_string(),
        },
        model,
        report,
        metadata: Metadata {
            created: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
            generator: GENERATOR_ID.to_string(),
            file_size: NOMINAL_FILE_SIZE.to_string(),
        },
    };

    info!(
        project = %document.name,
        tables = document.model.tables.len(),
        measures = document.model.measures.len(),
        pages = document.report.pages.len(),
        "Built project document"
    );

    document
}
