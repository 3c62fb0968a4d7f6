//! Measure names → DAX-style formulas.
//!
//! The aggregation is picked from Portuguese/English keywords in the raw name,
//! matched case-insensitively as substrings. Rules are checked in order and
//! the first hit wins; anything unmatched is summed.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::model::measure::{Aggregation, Calculation, Measure, MeasureFormat};
use crate::model::schema::FACT_TABLE;
use crate::model::{ProjectConfig, ReportType};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static AGGREGATION_RULES: LazyLock<Vec<(Regex, Aggregation)>> = LazyLock::new(|| {
    vec![
        (keyword_pattern(&["média", "media"]), Aggregation::Average),
        (keyword_pattern(&["contagem", "count"]), Aggregation::Count),
        (keyword_pattern(&["percentual", "%"]), Aggregation::Percentage),
    ]
});

static CURRENCY_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(&["valor", "preço"]));

fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", alternation)).unwrap()
}

/// Pick the aggregation for a raw measure name.
pub fn classify(raw: &str) -> Aggregation {
    AGGREGATION_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(raw))
        .map(|(_, agg)| *agg)
        .unwrap_or(Aggregation::Sum)
}

/// Pick the display format for a raw measure name.
pub fn format_for(raw: &str) -> MeasureFormat {
    if CURRENCY_KEYWORDS.is_match(raw) {
        MeasureFormat::Currency
    } else {
        MeasureFormat::Number
    }
}

fn aggregation_expr(aggregation: Aggregation, raw: &str) -> String {
    match aggregation {
        Aggregation::Average => format!("AVERAGE({}[{}])", FACT_TABLE, raw),
        Aggregation::Count => format!("COUNT({}[{}])", FACT_TABLE, raw),
        Aggregation::Percentage => format!(
            "DIVIDE(SUM({0}[{1}]), SUM({0}[Total]), 0) * 100",
            FACT_TABLE, raw
        ),
        Aggregation::Sum => format!("SUM({}[{}])", FACT_TABLE, raw),
    }
}

/// Compile a single raw measure name.
///
/// The column reference keeps the raw name; only the formula identifier has
/// its whitespace stripped.
pub fn compile_measure(raw: &str) -> Measure {
    let name = WHITESPACE.replace_all(raw, "").into_owned();
    let expr = aggregation_expr(classify(raw), raw);

    Measure {
        formula: format!("{} = {}", name, expr),
        name,
        format_string: format_for(raw).pattern().to_string(),
    }
}

/// Compile measure names in order. Repeated names yield repeated entries.
pub fn compile_measures(measures: &[String]) -> Vec<Measure> {
    let compiled: Vec<Measure> = measures.iter().map(|m| compile_measure(m)).collect();
    debug!(measures = compiled.len(), "Compiled measures");
    compiled
}

/// Report-level calculations. Only dashboards get any.
pub fn derive_calculations(config: &ProjectConfig) -> Vec<Calculation> {
    if config.report_type != ReportType::Dashboard {
        return vec![];
    }

    let total = if config.measures.is_empty() {
        "0".to_string()
    } else {
        let terms = config
            .measures
            .iter()
            .map(|m| format!("[{}]", m))
            .collect::<Vec<_>>()
            .join(" + ");
        format!("SUM({})", terms)
    };

    let average = config
        .measures
        .first()
        .map(|m| format!("AVERAGE([{}])", m))
        .unwrap_or_else(|| "0".to_string());

    vec![
        Calculation {
            name: "Total Geral".to_string(),
            expression: total,
        },
        Calculation {
            name: "Média Período".to_string(),
            expression: average,
        },
    ]
}
