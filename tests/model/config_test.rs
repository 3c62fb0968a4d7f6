#[cfg(test)]
mod tests {
    use pbiforge::model::{ConfigError, DataSource, ProjectConfig, ReportType, Theme, VisualKind};
    use std::fs;

    #[test]
    fn test_default_matches_wizard_initial_state() {
        let config = ProjectConfig::default();

        assert!(config.project_name.is_empty());
        assert!(config.description.is_empty());
        assert_eq!(config.data_source, DataSource::Excel);
        assert_eq!(config.report_type, ReportType::Dashboard);
        assert_eq!(config.theme, Theme::Corporate);
        assert!(config.dimensions.is_empty());
        assert!(config.measures.is_empty());
        assert!(config.visualizations.is_empty());
    }

    #[test]
    fn test_deserialize_uses_display_labels() {
        let json = r#"{
            "projectName": "Vendas",
            "dataSource": "Azure SQL",
            "reportType": "Relatório Detalhado",
            "dimensions": ["Data", "Produto"],
            "measures": ["Valor Total"],
            "visualizations": ["Gráfico de Barras", "Cartão"],
            "theme": "Executive"
        }"#;

        let config: ProjectConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.project_name, "Vendas");
        assert_eq!(config.data_source, DataSource::AzureSql);
        assert_eq!(config.report_type, ReportType::DetailedReport);
        assert_eq!(config.visualizations, vec![VisualKind::BarChart, VisualKind::Card]);
        assert_eq!(config.theme, Theme::Executive);
        // Missing fields fall back to defaults
        assert!(config.description.is_empty());
    }

    #[test]
    fn test_unknown_visualization_is_rejected() {
        let json = r#"{ "visualizations": ["Radar"] }"#;
        assert!(serde_json::from_str::<ProjectConfig>(json).is_err());
    }

    #[test]
    fn test_serialize_echoes_camel_case_labels() {
        let config = ProjectConfig::new()
            .with_data_source(DataSource::WebApi)
            .with_report_type(ReportType::AdhocAnalysis);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["dataSource"], "Web API");
        assert_eq!(value["reportType"], "Análise Ad-hoc");
        assert_eq!(value["projectName"], "");
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let config = ProjectConfig::new()
            .with_dimension("Data")
            .with_dimension("Loja")
            .with_dimension("Data");

        assert_eq!(config.dimensions, vec!["Data", "Loja", "Data"]);
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("project.json");
        fs::write(&json_path, r#"{ "projectName": "A", "measures": ["Vendas"] }"#).unwrap();
        let from_json = ProjectConfig::load(&json_path).unwrap();
        assert_eq!(from_json.project_name, "A");
        assert_eq!(from_json.measures, vec!["Vendas"]);

        let toml_path = dir.path().join("project.toml");
        fs::write(
            &toml_path,
            "projectName = \"B\"\nreportType = \"Scorecard\"\ndimensions = [\"Data\"]\n",
        )
        .unwrap();
        let from_toml = ProjectConfig::load(&toml_path).unwrap();
        assert_eq!(from_toml.project_name, "B");
        assert_eq!(from_toml.report_type, ReportType::Scorecard);
        assert_eq!(from_toml.dimensions, vec!["Data"]);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = ProjectConfig::load(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let yaml_path = dir.path().join("project.yaml");
        fs::write(&yaml_path, "projectName: x").unwrap();
        let unsupported = ProjectConfig::load(&yaml_path);
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_catalog_has_twelve_kinds_in_wizard_order() {
        assert_eq!(VisualKind::ALL.len(), 12);
        assert_eq!(VisualKind::ALL[0].label(), "Gráfico de Barras");
        assert_eq!(VisualKind::ALL[3], VisualKind::Table);
        assert_eq!(VisualKind::ALL[11].label(), "Gráfico de Área");
    }
}
