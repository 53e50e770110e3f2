use tracing::debug;

use crate::domain::{Iata, Itinerary};

use super::Planner;

impl Planner<'_> {
    /// Every single-leg itinerary from `origin` to `destination`, fastest
    /// first. Equal durations keep catalog order. Not limited by
    /// `max_results`.
    pub fn find_direct(&self, origin: Iata, destination: Iata) -> Vec<Itinerary> {
        let mut itineraries: Vec<Itinerary> = self
            .graph
            .departures(&origin)
            .iter()
            .filter(|edge| edge.destination == destination)
            .filter_map(|edge| Itinerary::new(vec![edge.segment.clone()]).ok())
            .collect();
        itineraries.sort_by_key(Itinerary::total_duration);

        debug!(
            origin = %origin,
            destination = %destination,
            found = itineraries.len(),
            "Direct lookup finished"
        );
        itineraries
    }
}
