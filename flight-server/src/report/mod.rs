//! Plain-text itinerary reports.
//!
//! Search results are turned into view models first, then rendered through
//! the askama templates in `templates/`.

mod views;

use askama::Template;

use crate::carriers::CarrierNames;
use crate::domain::Itinerary;
use crate::planner::Comparison;

pub use views::{ComparisonView, ItineraryView, LegRow, format_duration};

/// Error rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

/// One itinerary as a table of legs.
#[derive(Template)]
#[template(path = "itinerary.txt")]
pub struct ItineraryTemplate {
    pub itinerary: ItineraryView,
}

/// Best uninformed, best informed, then the remaining options.
#[derive(Template)]
#[template(path = "comparison.txt")]
pub struct ComparisonTemplate {
    pub mode_upper: String,
    pub mode_title: String,
    pub best: Option<ItineraryView>,
    pub informed: Option<ItineraryView>,
    pub others: Vec<ItineraryView>,
    pub empty_message: &'static str,
}

impl From<ComparisonView> for ComparisonTemplate {
    fn from(view: ComparisonView) -> Self {
        Self {
            mode_upper: view.mode_upper,
            mode_title: view.mode_title,
            best: view.best,
            informed: view.informed,
            others: view.others,
            empty_message: view.empty_message,
        }
    }
}

/// Render a single itinerary.
pub fn render_itinerary(
    itinerary: &Itinerary,
    carriers: &CarrierNames,
) -> Result<String, ReportError> {
    let template = ItineraryTemplate {
        itinerary: ItineraryView::from_itinerary(itinerary, carriers),
    };
    Ok(template.render()?)
}

/// Render both strategies' answers to one query.
pub fn render_comparison(
    comparison: &Comparison,
    carriers: &CarrierNames,
) -> Result<String, ReportError> {
    let template = ComparisonTemplate::from(ComparisonView::from_comparison(comparison, carriers));
    Ok(template.render()?)
}
