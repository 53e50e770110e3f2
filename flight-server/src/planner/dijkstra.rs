//! Uninformed multi-result search.

use tracing::debug;

use crate::domain::Iata;

use super::heuristic::ZeroHeuristic;
use super::search::{ResultSink, explore};
use super::{Planner, SearchResult};

impl Planner<'_> {
    /// Find up to `max_results` connecting itineraries, fastest first.
    ///
    /// Priority is the elapsed time from the first departure, so layovers
    /// count against a path and tight connections are preferred. Itineraries
    /// of equal duration keep the order they were discovered in. An origin
    /// with no departures, or no valid path, yields an empty result.
    pub fn find_connected(&self, origin: Iata, destination: Iata) -> SearchResult {
        let mut sink = ResultSink::new(self.config.max_results);
        let states_explored = explore(
            self.graph,
            origin,
            destination,
            self.config,
            &ZeroHeuristic,
            &mut sink,
        );

        let itineraries = sink.into_sorted();
        debug!(
            origin = %origin,
            destination = %destination,
            found = itineraries.len(),
            states_explored,
            "Uninformed search finished"
        );

        SearchResult {
            itineraries,
            states_explored,
        }
    }
}
