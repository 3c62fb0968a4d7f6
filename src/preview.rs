//! Plain-text previews of a configuration and its derived structure.

use crate::derive::{compile_measures, derive_schema};
use crate::format::IndentWriter;
use crate::model::{ProjectConfig, Relationship, Table};

/// Title shown when the project has no name yet.
pub const UNTITLED_PROJECT: &str = "Projeto PowerBI";

/// Placeholder rendered when there is nothing to derive a model from.
pub const EMPTY_STRUCTURE_PLACEHOLDER: &str =
    "Estrutura Power BI\nAdicione dimensões e medidas para gerar a estrutura do projeto\n";

/// One-line description of a relationship.
pub fn describe_relationship(rel: &Relationship) -> String {
    format!(
        "{}.{} → {}.{} ({})",
        rel.from_table,
        rel.from_column,
        rel.to_table,
        rel.to_column,
        rel.cardinality.notation()
    )
}

fn write_table(w: &mut IndentWriter, table: &Table) {
    w.write_line(&format!("{} [{:?}]", table.name, table.kind));
    w.indent();
    for column in &table.columns {
        let key = if column.is_key { " (key)" } else { "" };
        w.write_item(&format!("{}: {:?}{}", column.name, column.data_type, key));
    }
    w.dedent();
}

/// Render the project card: name, source, type, theme and field counts.
pub fn render_summary(config: &ProjectConfig) -> String {
    let mut w = IndentWriter::default();

    let title = if config.project_name.is_empty() {
        UNTITLED_PROJECT
    } else {
        config.project_name.as_str()
    };
    w.write_heading(title);
    if !config.description.is_empty() {
        w.write_line(&config.description);
    }
    w.blank_line();

    w.write_line(&format!("Fonte de Dados: {}", config.data_source));
    w.write_line(&format!("Tipo: {}", config.report_type));
    w.write_line(&format!("Tema: {}", config.theme));

    if !config.dimensions.is_empty() {
        w.blank_line();
        w.write_counted_heading("Dimensões", config.dimensions.len());
        for dim in &config.dimensions {
            w.write_item(dim);
        }
    }

    if !config.measures.is_empty() {
        w.blank_line();
        w.write_counted_heading("Medidas", config.measures.len());
        for measure in &config.measures {
            w.write_item(measure);
        }
    }

    if !config.visualizations.is_empty() {
        w.blank_line();
        w.write_counted_heading("Visualizações", config.visualizations.len());
        for viz in &config.visualizations {
            w.write_item(viz.label());
        }
    }

    w.into_string()
}

/// Render tables, relationships and compiled measures.
///
/// Returns [`EMPTY_STRUCTURE_PLACEHOLDER`] when the configuration has no
/// dimensions and no measures.
pub fn render_structure(config: &ProjectConfig) -> String {
    if config.has_empty_model() {
        return EMPTY_STRUCTURE_PLACEHOLDER.to_string();
    }

    let schema = derive_schema(config);
    let measures = compile_measures(&config.measures);
    let mut w = IndentWriter::default();

    w.write_counted_heading("Tabelas", schema.tables.len());
    for table in &schema.tables {
        write_table(&mut w, table);
    }

    if !schema.relationships.is_empty() {
        w.blank_line();
        w.write_counted_heading("Relacionamentos", schema.relationships.len());
        for rel in &schema.relationships {
            w.write_item(&describe_relationship(rel));
        }
    }

    if !measures.is_empty() {
        w.blank_line();
        w.write_counted_heading("Medidas DAX", measures.len());
        for measure in &measures {
            w.write_item(&measure.formula);
            w.indent();
            w.write_line(&format!("formato: {}", measure.format_string));
            w.dedent();
        }
    }

    w.into_string()
}
