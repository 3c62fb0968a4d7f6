//! Wizard configuration snapshot.
//!
//! A [`ProjectConfig`] is the value the form collects. It is never edited in
//! place: every `with_*` / `without_*` method returns a fresh snapshot and
//! leaves the receiver untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for loading a configuration snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON config: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported config format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Where the report's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataSource {
    #[default]
    Excel,
    #[serde(rename = "SQL Server")]
    SqlServer,
    #[serde(rename = "Azure SQL")]
    AzureSql,
    SharePoint,
    #[serde(rename = "Web API")]
    WebApi,
    Oracle,
}

impl DataSource {
    pub const ALL: [DataSource; 6] = [
        DataSource::Excel,
        DataSource::SqlServer,
        DataSource::AzureSql,
        DataSource::SharePoint,
        DataSource::WebApi,
        DataSource::Oracle,
    ];

    /// Display label, as shown in the wizard and echoed in the document.
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Excel => "Excel",
            DataSource::SqlServer => "SQL Server",
            DataSource::AzureSql => "Azure SQL",
            DataSource::SharePoint => "SharePoint",
            DataSource::WebApi => "Web API",
            DataSource::Oracle => "Oracle",
        }
    }

    /// Parse from a display label (exact match).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Connection string template for this source.
    ///
    /// Placeholders such as `{server}` are left for the report author to fill in.
    pub fn connection_template(&self) -> &'static str {
        match self {
            DataSource::Excel => {
                "Provider=Microsoft.ACE.OLEDB.12.0;Data Source={file_path};Extended Properties='Excel 12.0;HDR=YES;'"
            }
            DataSource::SqlServer => "Server={server};Database={database};Trusted_Connection=true;",
            DataSource::AzureSql => {
                "Server=tcp:{server}.database.windows.net,1433;Database={database};Authentication=Active Directory Integrated;"
            }
            DataSource::SharePoint => "Url={sharepoint_url};",
            DataSource::WebApi => "BaseUrl={api_base_url};",
            DataSource::Oracle => {
                "Data Source={server}:{port}/{service_name};User Id={username};Password={password};"
            }
        }
    }
}

/// Kind of report the wizard produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    Dashboard,
    #[serde(rename = "Relatório Detalhado")]
    DetailedReport,
    Scorecard,
    #[serde(rename = "Análise Ad-hoc")]
    AdhocAnalysis,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Dashboard,
        ReportType::DetailedReport,
        ReportType::Scorecard,
        ReportType::AdhocAnalysis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Dashboard => "Dashboard",
            ReportType::DetailedReport => "Relatório Detalhado",
            ReportType::Scorecard => "Scorecard",
            ReportType::AdhocAnalysis => "Análise Ad-hoc",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Visual theme applied to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Corporate,
    Modern,
    Colorful,
    Executive,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Corporate, Theme::Modern, Theme::Colorful, Theme::Executive];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Corporate => "Corporate",
            Theme::Modern => "Modern",
            Theme::Colorful => "Colorful",
            Theme::Executive => "Executive",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// The fixed catalog of visualization kinds offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    #[serde(rename = "Gráfico de Barras")]
    BarChart,
    #[serde(rename = "Gráfico de Linhas")]
    LineChart,
    #[serde(rename = "Gráfico de Pizza")]
    PieChart,
    #[serde(rename = "Tabela")]
    Table,
    #[serde(rename = "Cartão")]
    Card,
    #[serde(rename = "Medidor")]
    Gauge,
    #[serde(rename = "Mapa")]
    Map,
    #[serde(rename = "Gráfico de Dispersão")]
    ScatterChart,
    #[serde(rename = "Funil")]
    Funnel,
    #[serde(rename = "Cascata")]
    Waterfall,
    Treemap,
    #[serde(rename = "Gráfico de Área")]
    AreaChart,
}

impl VisualKind {
    /// Catalog in wizard order.
    pub const ALL: [VisualKind; 12] = [
        VisualKind::BarChart,
        VisualKind::LineChart,
        VisualKind::PieChart,
        VisualKind::Table,
        VisualKind::Card,
        VisualKind::Gauge,
        VisualKind::Map,
        VisualKind::ScatterChart,
        VisualKind::Funnel,
        VisualKind::Waterfall,
        VisualKind::Treemap,
        VisualKind::AreaChart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisualKind::BarChart => "Gráfico de Barras",
            VisualKind::LineChart => "Gráfico de Linhas",
            VisualKind::PieChart => "Gráfico de Pizza",
            VisualKind::Table => "Tabela",
            VisualKind::Card => "Cartão",
            VisualKind::Gauge => "Medidor",
            VisualKind::Map => "Mapa",
            VisualKind::ScatterChart => "Gráfico de Dispersão",
            VisualKind::Funnel => "Funil",
            VisualKind::Waterfall => "Cascata",
            VisualKind::Treemap => "Treemap",
            VisualKind::AreaChart => "Gráfico de Área",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

macro_rules! display_as_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_as_label!(DataSource, ReportType, Theme, VisualKind);

/// User choices collected by the wizard.
///
/// Order of `dimensions` and `measures` is significant: the first dimension
/// becomes the key of the dimension table, and both lists keep duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub project_name: String,
    pub description: String,
    pub data_source: DataSource,
    pub report_type: ReportType,
    pub dimensions: Vec<String>,
    pub measures: Vec<String>,
    pub visualizations: Vec<VisualKind>,
    pub theme: Theme,
}

impl ProjectConfig {
    /// Create an empty snapshot with the wizard's initial choices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a `.json` or `.toml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = fs::read_to_string(path)?;
        let config = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        Ok(config)
    }

    pub fn with_project_name(&self, name: impl Into<String>) -> Self {
        Self {
            project_name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_data_source(&self, data_source: DataSource) -> Self {
        Self {
            data_source,
            ..self.clone()
        }
    }

    pub fn with_report_type(&self, report_type: ReportType) -> Self {
        Self {
            report_type,
            ..self.clone()
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    /// Append a dimension. Input is trimmed; blank input is ignored.
    pub fn with_dimension(&self, raw: &str) -> Self {
        let mut next = self.clone();
        if let Some(name) = non_blank(raw) {
            next.dimensions.push(name);
        }
        next
    }

    /// Append a measure. Input is trimmed; blank input is ignored.
    pub fn with_measure(&self, raw: &str) -> Self {
        let mut next = self.clone();
        if let Some(name) = non_blank(raw) {
            next.measures.push(name);
        }
        next
    }

    /// Remove the dimension at `index`, if any.
    pub fn without_dimension(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.dimensions.len() {
            next.dimensions.remove(index);
        }
        next
    }

    /// Remove the measure at `index`, if any.
    pub fn without_measure(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.measures.len() {
            next.measures.remove(index);
        }
        next
    }

    /// Select `kind` if it is not selected yet, otherwise deselect it.
    pub fn toggling_visualization(&self, kind: VisualKind) -> Self {
        let mut next = self.clone();
        if next.visualizations.contains(&kind) {
            next.visualizations.retain(|v| *v != kind);
        } else {
            next.visualizations.push(kind);
        }
        next
    }

    /// True when there is nothing to derive a data model from.
    pub fn has_empty_model(&self) -> bool {
        self.dimensions.is_empty() && self.measures.is_empty()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
