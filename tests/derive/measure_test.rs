//! Measure compilation: names, formula heuristics and formats.

use pbiforge::derive::{classify, compile_measures};
use pbiforge::model::{Aggregation, MeasureFormat};

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_average_keyword() {
    let measures = compile_measures(&names(&["Média de Vendas"]));

    assert_eq!(measures[0].name, "MédiadeVendas");
    assert!(measures[0].formula.contains("AVERAGE("));
    assert_eq!(
        measures[0].formula,
        "MédiadeVendas = AVERAGE(FactDados[Média de Vendas])"
    );
}

#[test]
fn test_unaccented_average_keyword() {
    assert_eq!(classify("Media Mensal"), Aggregation::Average);
}

#[test]
fn test_count_keyword() {
    let measures = compile_measures(&names(&["Contagem de Pedidos", "Order Count"]));

    assert_eq!(
        measures[0].formula,
        "ContagemdePedidos = COUNT(FactDados[Contagem de Pedidos])"
    );
    assert_eq!(measures[1].formula, "OrderCount = COUNT(FactDados[Order Count])");
}

#[test]
fn test_percentage_keyword() {
    let measures = compile_measures(&names(&["Percentual de Margem", "Margem %"]));

    assert!(measures[0].formula.contains("DIVIDE("));
    assert_eq!(
        measures[1].formula,
        "Margem% = DIVIDE(SUM(FactDados[Margem %]), SUM(FactDados[Total]), 0) * 100"
    );
}

#[test]
fn test_default_sum_with_currency_format() {
    let measures = compile_measures(&names(&["Valor Total"]));

    assert!(measures[0].formula.contains("SUM("));
    assert_eq!(measures[0].formula, "ValorTotal = SUM(FactDados[Valor Total])");
    assert_eq!(measures[0].format_string, MeasureFormat::Currency.pattern());
    assert_eq!(measures[0].format_string, "\"R$ \"#,##0.00");
}

#[test]
fn test_plain_number_format() {
    let measures = compile_measures(&names(&["Quantidade"]));
    assert_eq!(measures[0].format_string, "#,##0.00");
}

#[test]
fn test_order_preserved_and_duplicates_kept() {
    let raw = names(&["Vendas", "Preço Médio", "Vendas", "Contagem"]);
    let measures = compile_measures(&raw);

    assert_eq!(measures.len(), raw.len());
    for (measure, raw_name) in measures.iter().zip(&raw) {
        let stripped: String = raw_name.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(measure.name, stripped);
    }
    assert_eq!(measures[0], measures[2]);
}

#[test]
fn test_compile_is_idempotent() {
    let raw = names(&["Média de Vendas", "Valor Total"]);
    assert_eq!(compile_measures(&raw), compile_measures(&raw));
}

#[test]
fn test_empty_input() {
    assert!(compile_measures(&[]).is_empty());
}
