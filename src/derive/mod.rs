//! Derivation passes from a configuration snapshot to the project model.
//!
//! Every pass is a pure function of its input: the same snapshot always yields
//! the same tables, measures and pages, and none of them can fail. Degenerate
//! input (no dimensions, no measures, no visuals) produces an empty or minimal
//! result rather than an error.

pub mod layout;
pub mod measure;
pub mod schema;

pub use layout::{layout_for, plan_pages, DETAILS_PAGE, MAIN_PAGE};
pub use measure::{classify, compile_measure, compile_measures, derive_calculations, format_for};
pub use schema::derive_schema;
