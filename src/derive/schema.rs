//! Configuration → star schema.

use tracing::debug;

use crate::model::schema::{
    foreign_key_column, Cardinality, Column, ColumnType, Relationship, Schema, Table, TableKind,
    DIMENSION_TABLE, FACT_TABLE,
};
use crate::model::ProjectConfig;

/// Derive the tables and relationships for a configuration.
///
/// - One dimension table when there are dimensions; its first column is the key.
/// - One fact table when there are measures: a foreign key per dimension, then
///   one decimal column per measure.
/// - One relationship per dimension when both tables exist.
pub fn derive_schema(config: &ProjectConfig) -> Schema {
    let mut schema = Schema::default();

    if !config.dimensions.is_empty() {
        schema.tables.push(dimension_table(&config.dimensions));
    }

    if !config.measures.is_empty() {
        schema
            .tables
            .push(fact_table(&config.dimensions, &config.measures));

        // Empty without dimensions, since there is no dimension table to link
        schema.relationships = config
            .dimensions
            .iter()
            .map(|dim| {
                Relationship::new(
                    DIMENSION_TABLE,
                    dim.as_str(),
                    FACT_TABLE,
                    foreign_key_column(dim),
                    Cardinality::OneToMany,
                )
            })
            .collect();
    }

    debug!(
        tables = schema.tables.len(),
        relationships = schema.relationships.len(),
        "Derived schema"
    );

    schema
}

fn dimension_table(dimensions: &[String]) -> Table {
    let columns = dimensions
        .iter()
        .enumerate()
        .map(|(idx, dim)| {
            let column = Column::new(dim.as_str(), ColumnType::String);
            // Position decides the key, so a repeated first name is not a key
            if idx == 0 {
                column.key()
            } else {
                column
            }
        })
        .collect();

    Table {
        name: DIMENSION_TABLE.to_string(),
        kind: TableKind::Dimension,
        columns,
    }
}

fn fact_table(dimensions: &[String], measures: &[String]) -> Table {
    let foreign_keys = dimensions
        .iter()
        .map(|dim| Column::new(foreign_key_column(dim), ColumnType::Integer));
    let values = measures
        .iter()
        .map(|measure| Column::new(measure.as_str(), ColumnType::Decimal));

    Table {
        name: FACT_TABLE.to_string(),
        kind: TableKind::Fact,
        columns: foreign_keys.chain(values).collect(),
    }
}
