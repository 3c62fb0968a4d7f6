//! Visual selection → report pages.
//!
//! The main page packs visuals row-major onto a fixed three-column grid:
//!
//! ```text
//!   x:   0        300      600
//! y=0    [0]      [1]      [2]
//! y=250  [3]      [4]      [5]
//! ```
//!
//! Each cell holds a 280x230 visual, leaving a 20px gutter.

use tracing::debug;

use crate::model::report::{
    Alignment, Arrangement, Background, Binding, Layout, Page, Position, Visual,
};
use crate::model::{ProjectConfig, ReportType, VisualKind};

pub const MAIN_PAGE: &str = "Página Principal";
pub const DETAILS_PAGE: &str = "Detalhes";

const GRID_COLUMNS: usize = 3;
const CELL_WIDTH: u32 = 300;
const CELL_HEIGHT: u32 = 250;
const VISUAL_WIDTH: u32 = 280;
const VISUAL_HEIGHT: u32 = 230;

/// Main-page visuals are bound to at most this many dimensions and measures.
const BOUND_FIELD_LIMIT: usize = 2;

const DETAILS_POSITION: Position = Position::new(0, 0, 1200, 600);

/// Grid position of the visual at `index` on the main page.
pub fn grid_position(index: usize) -> Position {
    let column = (index % GRID_COLUMNS) as u32;
    let row = (index / GRID_COLUMNS) as u32;
    Position::new(column * CELL_WIDTH, row * CELL_HEIGHT, VISUAL_WIDTH, VISUAL_HEIGHT)
}

/// Plan the report pages for a configuration.
///
/// Always one main page; detailed reports also get a details page holding a
/// single full-width table bound to every dimension and measure.
pub fn plan_pages(config: &ProjectConfig) -> Vec<Page> {
    let binding = Binding {
        dimensions: leading(&config.dimensions),
        measures: leading(&config.measures),
    };

    let visuals = config
        .visualizations
        .iter()
        .enumerate()
        .map(|(idx, kind)| Visual {
            kind: *kind,
            position: grid_position(idx),
            data: binding.clone(),
        })
        .collect();

    let mut pages = vec![Page {
        name: MAIN_PAGE.to_string(),
        visuals,
    }];

    if config.report_type == ReportType::DetailedReport {
        pages.push(Page {
            name: DETAILS_PAGE.to_string(),
            visuals: vec![Visual {
                kind: VisualKind::Table,
                position: DETAILS_POSITION,
                data: Binding {
                    dimensions: config.dimensions.clone(),
                    measures: config.measures.clone(),
                },
            }],
        });
    }

    debug!(
        pages = pages.len(),
        visuals = config.visualizations.len(),
        "Planned report pages"
    );

    pages
}

fn leading(fields: &[String]) -> Vec<String> {
    fields.iter().take(BOUND_FIELD_LIMIT).cloned().collect()
}

/// Layout metadata for a report type.
pub fn layout_for(report_type: ReportType) -> Layout {
    match report_type {
        ReportType::Dashboard => Layout {
            arrangement: Arrangement::Grid,
            columns: Some(GRID_COLUMNS as u32),
            spacing: Some(10),
            alignment: None,
            background: Background::White,
        },
        ReportType::DetailedReport => Layout {
            arrangement: Arrangement::Vertical,
            columns: None,
            spacing: Some(5),
            alignment: None,
            background: Background::White,
        },
        ReportType::Scorecard => Layout {
            arrangement: Arrangement::Card,
            columns: None,
            spacing: None,
            alignment: Some(Alignment::Center),
            background: Background::Gradient,
        },
        ReportType::AdhocAnalysis => Layout {
            arrangement: Arrangement::Flexible,
            columns: None,
            spacing: None,
            alignment: None,
            background: Background::White,
        },
    }
}
