//! Itinerary planner.
//!
//! Builds a per-date flight graph and searches it for itineraries between
//! two airports, optimising total elapsed time (layovers included) under
//! leg-count and connection-window constraints.
//!
//! Two strategies are offered for comparison: an uninformed priority-first
//! search returning the k fastest connecting itineraries, and an informed
//! search returning the single best one under a pluggable heuristic.

mod astar;
mod config;
mod dijkstra;
mod direct;
mod frontier;
mod graph;
mod heuristic;
mod search;


use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Iata, Itinerary};

pub use config::{MAX_LEGS_LIMIT, MAX_RESULTS_LIMIT, SearchConfig};
pub use frontier::{Entry, Frontier};
pub use graph::{Edge, FlightGraph};
pub use heuristic::{Heuristic, ZeroHeuristic};
pub use search::{ResultSink, VisitedKey, explore};

/// Error from itinerary search.
///
/// Not finding an itinerary is never an error; these only cover requests
/// that cannot be searched at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Search constraints are inconsistent
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Whether itineraries may connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Single-leg itineraries only.
    Direct,
    /// Itineraries of two or more legs.
    Connected,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Direct => "direct",
            SearchMode::Connected => "connected",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "n" => Ok(SearchMode::Direct),
            "connected" | "y" => Ok(SearchMode::Connected),
            other => Err(SearchError::InvalidRequest(format!(
                "unknown search mode: {other}"
            ))),
        }
    }
}

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: Iata,
    pub destination: Iata,
    pub date: NaiveDate,
    pub mode: SearchMode,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: Iata, destination: Iata, date: NaiveDate, mode: SearchMode) -> Self {
        Self {
            origin,
            destination,
            date,
            mode,
        }
    }
}

/// Result of the uninformed multi-result search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found itineraries, fastest first.
    pub itineraries: Vec<Itinerary>,

    /// Number of search states expanded.
    pub states_explored: usize,
}

/// Both strategies' answers to one query.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub mode: SearchMode,

    /// Uninformed results, fastest first.
    pub uninformed: Vec<Itinerary>,

    /// The informed search's single answer.
    pub informed: Option<Itinerary>,

    /// States expanded by the uninformed search (zero in direct mode).
    pub states_explored: usize,
}

impl Comparison {
    /// The fastest itinerary found by the uninformed search.
    pub fn best(&self) -> Option<&Itinerary> {
        self.uninformed.first()
    }

    /// Every uninformed result after the best one.
    pub fn alternatives(&self) -> &[Itinerary] {
        self.uninformed.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.uninformed.is_empty() && self.informed.is_none()
    }
}

/// Itinerary planner over one day's flight graph.
pub struct Planner<'a> {
    graph: &'a FlightGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a FlightGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &FlightGraph {
        self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        self.config
    }

    /// Run both strategies for `mode` and return their answers side by side.
    pub fn compare<H: Heuristic + ?Sized>(
        &self,
        origin: Iata,
        destination: Iata,
        mode: SearchMode,
        heuristic: &H,
    ) -> Comparison {
        match mode {
            SearchMode::Connected => {
                let result = self.find_connected(origin, destination);
                let informed = self.best_connected(origin, destination, heuristic);
                Comparison {
                    mode,
                    uninformed: result.itineraries,
                    informed,
                    states_explored: result.states_explored,
                }
            }
            SearchMode::Direct => Comparison {
                mode,
                uninformed: self.find_direct(origin, destination),
                informed: self.best_direct(origin, destination),
                states_explored: 0,
            },
        }
    }
}

/// Filter the catalog to the request's date, build the graph and compare
/// both strategies with the zero heuristic.
///
/// # Errors
///
/// Returns `Err` only for an unusable configuration.
pub fn plan(
    catalog: &crate::catalog::SegmentCatalog,
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<Comparison, SearchError> {
    let graph = FlightGraph::for_date(catalog, request.date);
    plan_with_graph(&graph, request, config)
}

/// Like [`plan`], over a graph already built for `request.date`.
///
/// # Errors
///
/// Returns `Err` only for an unusable configuration.
pub fn plan_with_graph(
    graph: &FlightGraph,
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<Comparison, SearchError> {
    config.validate()?;
    let planner = Planner::new(graph, config);
    Ok(planner.compare(
        request.origin,
        request.destination,
        request.mode,
        &ZeroHeuristic,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing() {
        assert_eq!("direct".parse::<SearchMode>().unwrap(), SearchMode::Direct);
        assert_eq!(
            " Connected ".parse::<SearchMode>().unwrap(),
            SearchMode::Connected
        );
        assert_eq!("Y".parse::<SearchMode>().unwrap(), SearchMode::Connected);
        assert_eq!("n".parse::<SearchMode>().unwrap(), SearchMode::Direct);
        assert!("both".parse::<SearchMode>().is_err());
    }

    #[test]
    fn mode_serde() {
        assert_eq!(
            serde_json::to_string(&SearchMode::Connected).unwrap(),
            "\"connected\""
        );
        let mode: SearchMode = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(mode, SearchMode::Direct);
        assert_eq!(mode.to_string(), "direct");
    }

    #[test]
    fn error_display() {
        let err = SearchError::InvalidConfig("max_legs must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid search configuration: max_legs must be at least 1"
        );
    }
}
