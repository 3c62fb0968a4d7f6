// src/model/measure.rs
use serde::{Deserialize, Serialize};

/// A compiled measure: formula identifier plus a DAX-style formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Raw measure name with all whitespace removed
    pub name: String,
    /// `<name> = <aggregation>`
    pub formula: String,
    pub format_string: String,
}

/// Report-level calculation (emitted for dashboards only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub name: String,
    pub expression: String,
}

/// Aggregation chosen for a measure from keywords in its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Average,
    Count,
    /// Share of the `Total` column, scaled to 0..100
    Percentage,
    Sum,
}

/// Display format of a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureFormat {
    Currency,
    Number,
}

impl MeasureFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            MeasureFormat::Currency => "\"R$ \"#,##0.00",
            MeasureFormat::Number => "#,##0.00",
        }
    }
}
