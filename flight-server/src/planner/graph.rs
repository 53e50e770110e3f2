//! Per-date flight graph.
//!
//! Adjacency from an origin airport to the segments departing it, built
//! fresh for one travel date.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::SegmentCatalog;
use crate::domain::{Iata, Segment};

/// An outbound edge: where the segment goes, and the segment itself.
#[derive(Debug, Clone)]
pub struct Edge {
    pub destination: Iata,
    pub segment: Arc<Segment>,
}

/// Origin airport → outbound edges, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    date: Option<NaiveDate>,
    adjacency: HashMap<Iata, Vec<Edge>>,
    segment_count: usize,
}

impl FlightGraph {
    /// Build a graph from segments already filtered to a single date.
    ///
    /// Edge order out of each airport follows input order.
    pub fn build<'a>(segments: impl IntoIterator<Item = &'a Arc<Segment>>) -> Self {
        let mut adjacency: HashMap<Iata, Vec<Edge>> = HashMap::new();
        let mut segment_count = 0;

        for segment in segments {
            adjacency
                .entry(segment.origin())
                .or_default()
                .push(Edge {
                    destination: segment.destination(),
                    segment: segment.clone(),
                });
            segment_count += 1;
        }

        Self {
            date: None,
            adjacency,
            segment_count,
        }
    }

    /// Build the graph of segments departing on `date`.
    pub fn for_date(catalog: &SegmentCatalog, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::build(catalog.on_date(date))
        }
    }

    /// The travel date this graph was filtered to, if built by
    /// [`FlightGraph::for_date`].
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Outbound edges from `airport`; empty if it has none.
    pub fn departures(&self, airport: &Iata) -> &[Edge] {
        self.adjacency
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of segments in the graph.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of airports with at least one departure.
    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn seg(from: &str, to: &str, d: u32, h: u32) -> Segment {
        Segment::new(iata(from), iata(to), at(d, h), at(d, h + 1), 0.0).unwrap()
    }

    #[test]
    fn build_groups_by_origin_in_order() {
        let segments: Vec<Arc<Segment>> = vec![
            Arc::new(seg("DEL", "BOM", 1, 8)),
            Arc::new(seg("BOM", "BLR", 1, 10)),
            Arc::new(seg("DEL", "BLR", 1, 6)),
        ];

        let graph = FlightGraph::build(&segments);

        assert_eq!(graph.segment_count(), 3);
        assert_eq!(graph.airport_count(), 2);
        assert_eq!(graph.date(), None);

        let from_del: Vec<&str> = graph
            .departures(&iata("DEL"))
            .iter()
            .map(|e| e.destination.as_str())
            .collect();
        assert_eq!(from_del, vec!["BOM", "BLR"]);

        // Edges share the input instances.
        assert!(Arc::ptr_eq(
            &graph.departures(&iata("DEL"))[0].segment,
            &segments[0]
        ));
    }

    #[test]
    fn unknown_airport_has_no_departures() {
        let graph = FlightGraph::build(std::iter::empty());
        assert!(graph.departures(&iata("DEL")).is_empty());
        assert_eq!(graph.segment_count(), 0);
    }

    #[test]
    fn for_date_filters_by_departure_date() {
        let catalog = SegmentCatalog::from_segments(vec![
            seg("DEL", "BOM", 1, 8),
            seg("DEL", "BOM", 2, 8),
            seg("BOM", "BLR", 1, 22),
        ]);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let graph = FlightGraph::for_date(&catalog, date);

        assert_eq!(graph.date(), Some(date));
        assert_eq!(graph.segment_count(), 2);
        assert_eq!(graph.departures(&iata("DEL")).len(), 1);
        assert_eq!(graph.departures(&iata("BOM")).len(), 1);
    }
}
