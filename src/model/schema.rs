//! Star-schema types produced by the schema deriver.

use serde::{Deserialize, Serialize};

/// Name of the single dimension table.
pub const DIMENSION_TABLE: &str = "DimPrincipal";

/// Name of the single fact table.
pub const FACT_TABLE: &str = "FactDados";

/// Suffix appended to a dimension name to form its foreign key column.
pub const FOREIGN_KEY_SUFFIX: &str = "Key";

/// Build the fact-table foreign key column name for a dimension.
pub fn foreign_key_column(dimension: &str) -> String {
    format!("{}{}", dimension, FOREIGN_KEY_SUFFIX)
}

/// Role of a table in the star schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    Dimension,
    Fact,
}

/// Column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    String,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    pub data_type: ColumnType,
    pub is_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_key: false,
        }
    }

    /// Mark this column as the table key.
    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub kind: TableKind,
    pub columns: Vec<Column>,
}

impl Table {
    /// Columns flagged as keys.
    pub fn key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_key)
    }
}

/// Relationship cardinality. The generated model only ever links one
/// dimension row to many fact rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    OneToMany,
}

impl Cardinality {
    /// Short arrow notation used in previews.
    pub fn notation(&self) -> &'static str {
        match self {
            Cardinality::OneToMany => "1:*",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub cardinality: Cardinality,
}

impl Relationship {
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            from_table: from_table.into(),
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
            cardinality,
        }
    }
}

/// Tables and relationships derived from a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.relationships.is_empty()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}
