//! Constrained priority-first itinerary search.
//!
//! Shared by the uninformed (Dijkstra-style) and informed (A*-style)
//! strategies. The two differ only in the heuristic folded into the
//! priority and in how many accepted itineraries they collect.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Iata, Itinerary, Segment};

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::graph::FlightGraph;
use super::heuristic::Heuristic;

/// Exploration state identity: the airport reached and the origins of
/// every leg flown to get there.
///
/// Two paths with the same key are treated as the same state and only the
/// first one popped is expanded. Paths that share the airport sequence but
/// use different flights therefore collapse into one.
pub type VisitedKey = (Iata, Vec<Iata>);

fn visited_key(location: Iata, path: &[Arc<Segment>]) -> VisitedKey {
    (location, path.iter().map(|s| s.origin()).collect())
}

/// Bounded accumulator for accepted itineraries.
#[derive(Debug)]
pub struct ResultSink {
    limit: usize,
    itineraries: Vec<Itinerary>,
}

impl ResultSink {
    /// A sink that accepts at most `limit` itineraries.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            itineraries: Vec::with_capacity(limit.min(16)),
        }
    }

    pub fn is_full(&self) -> bool {
        self.itineraries.len() >= self.limit
    }

    /// Record an itinerary. Returns true once the sink is full.
    pub fn push(&mut self, itinerary: Itinerary) -> bool {
        if !self.is_full() {
            self.itineraries.push(itinerary);
        }
        self.is_full()
    }

    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// The collected itineraries, ascending by total elapsed time. The sort
    /// is stable, so equal times keep discovery order.
    pub fn into_sorted(mut self) -> Vec<Itinerary> {
        self.itineraries.sort_by_key(Itinerary::total_duration);
        self.itineraries
    }
}

/// Elapsed time from the first departure of `path` to `segment`'s arrival.
fn elapsed_through(path: &[Arc<Segment>], segment: &Segment) -> Duration {
    let start = path.first().map_or(segment.departure(), |s| s.departure());
    segment.arrival().signed_duration_since(start)
}

/// Run the search from `origin` to `destination`, feeding accepted
/// itineraries into `sink` until it is full or the frontier is exhausted.
///
/// Only itineraries of two or more legs are accepted. Returns the number of
/// states expanded.
pub fn explore<H: Heuristic + ?Sized>(
    graph: &FlightGraph,
    origin: Iata,
    destination: Iata,
    config: &SearchConfig,
    heuristic: &H,
    sink: &mut ResultSink,
) -> usize {
    let mut frontier = Frontier::new();
    let mut visited: HashSet<VisitedKey> = HashSet::new();
    let mut expanded = 0;

    for edge in graph.departures(&origin) {
        let priority = edge.segment.duration() + heuristic.estimate(&edge.destination, &destination);
        frontier.push(priority, edge.destination, vec![edge.segment.clone()]);
    }

    while !sink.is_full() {
        let Some(entry) = frontier.pop() else {
            break;
        };

        if !visited.insert(visited_key(entry.location, &entry.path)) {
            continue;
        }
        expanded += 1;

        if entry.location == destination && entry.path.len() > 1 {
            // Paths from the frontier always chain and never repeat a
            // segment, so construction cannot fail here.
            if let Ok(itinerary) = Itinerary::new(entry.path) {
                trace!(
                    legs = itinerary.leg_count(),
                    minutes = itinerary.total_duration().num_minutes(),
                    "Accepted itinerary"
                );
                sink.push(itinerary);
            }
            continue;
        }

        if entry.path.len() >= config.max_legs {
            continue;
        }

        let Some(last) = entry.path.last() else {
            continue;
        };
        let last_arrival = last.arrival();

        for edge in graph.departures(&entry.location) {
            if entry.path.iter().any(|s| Arc::ptr_eq(s, &edge.segment)) {
                continue;
            }

            let gap = edge.segment.departure().signed_duration_since(last_arrival);
            if !config.allows_connection(gap) {
                continue;
            }

            let priority = elapsed_through(&entry.path, &edge.segment)
                + heuristic.estimate(&edge.destination, &destination);

            let mut path = Vec::with_capacity(entry.path.len() + 1);
            path.extend(entry.path.iter().cloned());
            path.push(edge.segment.clone());

            frontier.push(priority, edge.destination, path);
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        expanded,
        pushed = frontier.pushed(),
        found = sink.len(),
        "Search complete"
    );

    expanded
}
