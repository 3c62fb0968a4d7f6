#[cfg(test)]
mod tests {
    use pbiforge::compile::FixedClock;
    use pbiforge::export::{Exporter, MemoryTarget};
    use pbiforge::model::{DataSource, ProjectConfig, VisualKind};
    use pbiforge::session::{Session, UploadKind, UploadedFile};

    #[test]
    fn test_apply_replaces_snapshot() {
        let mut session = Session::new();
        let before = session.config().clone();

        session.apply(|c| c.with_project_name("Vendas").with_dimension("Data"));

        assert_eq!(before, ProjectConfig::default());
        assert_eq!(session.config().project_name, "Vendas");
        assert_eq!(session.config().dimensions, vec!["Data"]);
    }

    #[test]
    fn test_excel_upload_switches_data_source() {
        let mut session =
            Session::with_config(ProjectConfig::new().with_data_source(DataSource::Oracle));

        session.upload(UploadedFile::new("vendas.xlsx", UploadKind::Excel));

        assert_eq!(session.config().data_source, DataSource::Excel);
        assert_eq!(session.uploads().len(), 1);
    }

    #[test]
    fn test_csv_upload_keeps_data_source() {
        let mut session =
            Session::with_config(ProjectConfig::new().with_data_source(DataSource::SharePoint));

        session.upload(UploadedFile::new("vendas.csv", UploadKind::Csv));

        assert_eq!(session.config().data_source, DataSource::SharePoint);
    }

    #[test]
    fn test_remove_upload() {
        let mut session = Session::new();
        session.upload(UploadedFile::new("a.csv", UploadKind::Csv));
        session.upload(UploadedFile::new("b.db", UploadKind::Database));

        let removed = session.remove_upload(0);

        assert_eq!(removed.map(|f| f.name), Some("a.csv".to_string()));
        assert_eq!(session.uploads()[0].name, "b.db");
        assert!(session.remove_upload(5).is_none());
    }

    #[test]
    fn test_export_uses_suggested_name() {
        let mut session = Session::new();
        session.apply(|c| {
            c.with_project_name("Painel")
                .with_measure("Vendas")
                .toggling_visualization(VisualKind::Card)
        });

        let exporter = Exporter::new(MemoryTarget::new());
        let receipt = session
            .export(&exporter, "pbix", &FixedClock::epoch())
            .unwrap();

        assert_eq!(receipt.file_name, "Painel.pbix");
        let saved = exporter.target().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Painel.pbix");
        assert_eq!(saved[0].contents.len(), receipt.bytes);
    }
}
