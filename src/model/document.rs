//! The exported project document.
//!
//! Field declaration order is the serialized key order, so two builds of the
//! same configuration serialize identically apart from `metadata.created`.

use serde::{Deserialize, Serialize};

use super::config::{DataSource, ProjectConfig};
use super::measure::{Calculation, Measure};
use super::report::Report;
use super::schema::{Relationship, Table};

/// Document format version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Identifier stamped into every document.
pub const GENERATOR_ID: &str = "Gerador Power BI v1.0";

/// Nominal size advertised in the metadata block.
pub const NOMINAL_FILE_SIZE: &str = "2.1 MB";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub version: String,
    /// Echo of the snapshot the document was built from
    pub config: ProjectConfig,
    pub name: String,
    pub description: String,
    pub data_source: DataSourceSection,
    pub model: ModelSection,
    pub report: Report,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceSection {
    #[serde(rename = "type")]
    pub kind: DataSource,
    pub connection_string: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSection {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
    pub measures: Vec<Measure>,
    pub calculations: Vec<Calculation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub created: String,
    pub generator: String,
    pub file_size: String,
}
