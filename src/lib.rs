//! # pbiforge
//!
//! Compiles report-wizard configuration into a self-describing Power BI
//! project document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            ProjectConfig (wizard snapshot)               │
//! │  (name, data source, dimensions, measures, visuals)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [derive]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Schema · Measures · Calculations · Pages · Layout      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [compile]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  ProjectDocument                         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [export]
//! ┌─────────────────────────────────────────────────────────┐
//! │            JSON text → SaveTarget (host)                 │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod compile;
pub mod config;
pub mod derive;
pub mod export;
pub mod format;
pub mod model;
pub mod preview;
pub mod session;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{build, build_with_clock, Clock, FixedClock, SystemClock};
    pub use crate::export::{
        suggested_file_name, DirectoryTarget, ExportError, ExportReceipt, Exporter, MemoryTarget,
        SaveTarget,
    };
    pub use crate::model::{
        DataSource, ProjectConfig, ProjectDocument, ReportType, Theme, VisualKind,
    };
    pub use crate::session::{Session, UploadKind, UploadedFile};
}

pub use compile::{build, build_with_clock};
pub use model::{ProjectConfig, ProjectDocument};
