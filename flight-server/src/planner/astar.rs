//! Informed single-result search.

use tracing::debug;

use crate::domain::{Iata, Itinerary};

use super::Planner;
use super::heuristic::Heuristic;
use super::search::{ResultSink, explore};

impl Planner<'_> {
    /// Return the first connecting itinerary the informed search accepts.
    ///
    /// The priority of a path is its elapsed time plus `heuristic`'s
    /// estimate from where it ends to `destination`. With an admissible
    /// heuristic the answer is the fastest connecting itinerary.
    pub fn best_connected<H: Heuristic + ?Sized>(
        &self,
        origin: Iata,
        destination: Iata,
        heuristic: &H,
    ) -> Option<Itinerary> {
        let mut sink = ResultSink::new(1);
        let states_explored = explore(
            self.graph,
            origin,
            destination,
            self.config,
            heuristic,
            &mut sink,
        );
        debug!(
            origin = %origin,
            destination = %destination,
            found = !sink.is_empty(),
            states_explored,
            "Informed search finished"
        );

        sink.into_sorted().into_iter().next()
    }

    /// The fastest single-leg itinerary, without any graph search.
    ///
    /// Ties go to the segment listed first in the catalog.
    pub fn best_direct(&self, origin: Iata, destination: Iata) -> Option<Itinerary> {
        self.graph
            .departures(&origin)
            .iter()
            .filter(|edge| edge.destination == destination)
            .min_by_key(|edge| edge.segment.duration())
            .and_then(|edge| Itinerary::new(vec![edge.segment.clone()]).ok())
    }
}
