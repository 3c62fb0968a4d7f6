//! Page planning and layout metadata.

use pbiforge::derive::{layout_for, plan_pages, DETAILS_PAGE, MAIN_PAGE};
use pbiforge::model::{Arrangement, Position, ProjectConfig, ReportType, VisualKind};

fn detailed_config() -> ProjectConfig {
    ProjectConfig::new()
        .with_report_type(ReportType::DetailedReport)
        .with_dimension("Data")
        .with_dimension("Produto")
        .with_dimension("Cliente")
        .with_measure("Vendas")
        .with_measure("Custo")
        .with_measure("Margem")
        .toggling_visualization(VisualKind::BarChart)
}

#[test]
fn test_fourth_visual_starts_second_row() {
    let config = ProjectConfig::new()
        .toggling_visualization(VisualKind::BarChart)
        .toggling_visualization(VisualKind::LineChart)
        .toggling_visualization(VisualKind::PieChart)
        .toggling_visualization(VisualKind::Card);
    let pages = plan_pages(&config);
    let visuals = &pages[0].visuals;

    assert_eq!(visuals.len(), 4);
    assert_eq!(visuals[3].kind, VisualKind::Card);
    assert_eq!(visuals[3].position, Position::new(0, 250, 280, 230));
    assert_eq!(visuals[1].position.x, 300);
    assert_eq!(visuals[2].position.x, 600);
}

#[test]
fn test_visuals_follow_selection_order() {
    let config = ProjectConfig::new()
        .toggling_visualization(VisualKind::Map)
        .toggling_visualization(VisualKind::Funnel);
    let kinds: Vec<_> = plan_pages(&config)[0].visuals.iter().map(|v| v.kind).collect();

    assert_eq!(kinds, vec![VisualKind::Map, VisualKind::Funnel]);
}

#[test]
fn test_detailed_report_has_details_page() {
    let config = detailed_config();
    let pages = plan_pages(&config);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].name, MAIN_PAGE);
    assert_eq!(pages[1].name, DETAILS_PAGE);

    let details = &pages[1].visuals;
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].kind, VisualKind::Table);
    assert_eq!(details[0].position, Position::new(0, 0, 1200, 600));
    assert_eq!(details[0].data.dimensions, config.dimensions);
    assert_eq!(details[0].data.measures, config.measures);
}

#[test]
fn test_main_page_bindings_are_truncated_for_detailed_report() {
    let pages = plan_pages(&detailed_config());
    let main = &pages[0].visuals[0].data;

    assert_eq!(main.dimensions, vec!["Data", "Produto"]);
    assert_eq!(main.measures, vec!["Vendas", "Custo"]);
}

#[test]
fn test_other_report_types_have_one_page() {
    for report_type in [ReportType::Dashboard, ReportType::Scorecard, ReportType::AdhocAnalysis] {
        let config = ProjectConfig::new().with_report_type(report_type);
        assert_eq!(plan_pages(&config).len(), 1, "{:?}", report_type);
    }
}

#[test]
fn test_layout_serialization_omits_absent_fields() {
    let dashboard = serde_json::to_value(layout_for(ReportType::Dashboard)).unwrap();
    assert_eq!(
        dashboard,
        serde_json::json!({ "type": "grid", "columns": 3, "spacing": 10, "background": "white" })
    );

    let scorecard = serde_json::to_value(layout_for(ReportType::Scorecard)).unwrap();
    assert_eq!(
        scorecard,
        serde_json::json!({ "type": "card", "alignment": "center", "background": "gradient" })
    );

    let adhoc = serde_json::to_value(layout_for(ReportType::AdhocAnalysis)).unwrap();
    assert_eq!(adhoc, serde_json::json!({ "type": "flexible", "background": "white" }));

    assert_eq!(layout_for(ReportType::DetailedReport).arrangement, Arrangement::Vertical);
    assert_eq!(layout_for(ReportType::DetailedReport).spacing, Some(5));
}
