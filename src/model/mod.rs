//! Configuration snapshot and the derived project model types.

pub mod config;
pub mod document;
pub mod measure;
pub mod report;
pub mod schema;

pub use config::{ConfigError, DataSource, ProjectConfig, ReportType, Theme, VisualKind};
pub use document::{DataSourceSection, Metadata, ModelSection, ProjectDocument};
pub use measure::{Aggregation, Calculation, Measure, MeasureFormat};
pub use report::{Alignment, Arrangement, Background, Binding, Layout, Page, Position, Report, Visual};
pub use schema::{Cardinality, Column, ColumnType, Relationship, Schema, Table, TableKind};
