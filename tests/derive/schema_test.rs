//! Schema derivation: table shapes, key selection and relationships.

use pbiforge::derive::derive_schema;
use pbiforge::model::schema::{DIMENSION_TABLE, FACT_TABLE};
use pbiforge::model::{Cardinality, ColumnType, ProjectConfig, TableKind};

fn config(dimensions: &[&str], measures: &[&str]) -> ProjectConfig {
    ProjectConfig {
        dimensions: dimensions.iter().map(|s| s.to_string()).collect(),
        measures: measures.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_empty_config_yields_empty_schema() {
    let schema = derive_schema(&ProjectConfig::new());

    assert!(schema.tables.is_empty());
    assert!(schema.relationships.is_empty());
    assert!(schema.is_empty());
}

#[test]
fn test_first_dimension_is_the_only_key() {
    let schema = derive_schema(&config(&["Data", "Produto", "Cliente"], &[]));
    let dim = schema.table(DIMENSION_TABLE).unwrap();

    assert_eq!(dim.kind, TableKind::Dimension);
    let keys: Vec<_> = dim.key_columns().map(|c| c.name.as_str()).collect();
    assert_eq!(keys, vec!["Data"]);
    assert!(dim.columns.iter().all(|c| c.data_type == ColumnType::String));
}

#[test]
fn test_fact_table_columns_in_order() {
    let schema = derive_schema(&config(&["Data", "Produto"], &["Vendas", "Custo", "Margem %"]));
    let fact = schema.table(FACT_TABLE).unwrap();

    assert_eq!(fact.kind, TableKind::Fact);
    let names: Vec<_> = fact.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DataKey", "ProdutoKey", "Vendas", "Custo", "Margem %"]
    );

    let types: Vec<_> = fact.columns.iter().map(|c| c.data_type).collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Integer,
            ColumnType::Integer,
            ColumnType::Decimal,
            ColumnType::Decimal,
            ColumnType::Decimal,
        ]
    );
    assert!(fact.columns.iter().all(|c| !c.is_key));
}

#[test]
fn test_fact_width_and_relationship_count() {
    let dims = ["A", "B", "C", "D"];
    let measures = ["X", "Y"];
    let schema = derive_schema(&config(&dims, &measures));

    let fact = schema.table(FACT_TABLE).unwrap();
    assert_eq!(fact.columns.len(), dims.len() + measures.len());
    assert_eq!(schema.relationships.len(), dims.len());

    for (rel, dim) in schema.relationships.iter().zip(dims) {
        assert_eq!(rel.from_table, DIMENSION_TABLE);
        assert_eq!(rel.from_column, dim);
        assert_eq!(rel.to_table, FACT_TABLE);
        assert_eq!(rel.to_column, format!("{}Key", dim));
        assert_eq!(rel.cardinality, Cardinality::OneToMany);
    }
}

#[test]
fn test_dimension_table_precedes_fact_table() {
    let schema = derive_schema(&config(&["Data"], &["Vendas"]));
    let names: Vec<_> = schema.tables.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec![DIMENSION_TABLE, FACT_TABLE]);
}

#[test]
fn test_derivation_is_deterministic() {
    let cfg = config(&["Data", "Loja"], &["Vendas"]);
    assert_eq!(derive_schema(&cfg), derive_schema(&cfg));
}
