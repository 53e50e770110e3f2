//! Itinerary type.
//!
//! An `Itinerary` is a complete trip from origin to destination made of one
//! or more flight segments flown back to back.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::{DomainError, Iata, Segment};

/// An ordered, chained sequence of flight segments.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments connect (destination of one = origin of next)
/// - No segment instance appears twice
#[derive(Debug, Clone)]
pub struct Itinerary {
    segments: Vec<Arc<Segment>>,
}

impl Itinerary {
    /// Constructs an itinerary from shared segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Segments list is empty
    /// - Segments don't connect (destination != next origin)
    /// - The same segment instance is used twice
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::{Iata, Itinerary, Segment};
    /// use chrono::NaiveDate;
    /// use std::sync::Arc;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let at = |h, m| date.and_hms_opt(h, m, 0).unwrap();
    /// let iata = |s| Iata::parse(s).unwrap();
    ///
    /// let first = Arc::new(Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(10, 0), 4000.0).unwrap());
    /// let second = Arc::new(Segment::new(iata("BOM"), iata("BLR"), at(11, 0), at(12, 30), 3000.0).unwrap());
    ///
    /// let itinerary = Itinerary::new(vec![first, second]).unwrap();
    ///
    /// assert_eq!(itinerary.leg_count(), 2);
    /// assert_eq!(itinerary.total_duration().num_minutes(), 270);
    /// assert_eq!(itinerary.total_price(), 7000.0);
    /// ```
    pub fn new(segments: Vec<Arc<Segment>>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in segments.windows(2) {
            let arrives_at = window[0].destination();
            let departs_from = window[1].origin();
            if arrives_at != departs_from {
                return Err(DomainError::SegmentsNotConnected(arrives_at, departs_from));
            }
        }

        for (i, segment) in segments.iter().enumerate() {
            if segments[..i].iter().any(|s| Arc::ptr_eq(s, segment)) {
                return Err(DomainError::RepeatedSegment);
            }
        }

        Ok(Itinerary { segments })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Arc<Segment>] {
        &self.segments
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the number of connections (legs - 1).
    pub fn change_count(&self) -> usize {
        self.leg_count() - 1
    }

    fn first(&self) -> &Segment {
        // Non-empty by construction
        &self.segments[0]
    }

    fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> Iata {
        self.first().origin()
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> Iata {
        self.last().destination()
    }

    /// Returns the departure time of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.first().departure()
    }

    /// Returns the arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.last().arrival()
    }

    /// Returns the travel date (departure date of the first leg).
    pub fn date(&self) -> NaiveDate {
        self.first().date()
    }

    /// Returns the total elapsed time, layovers included.
    ///
    /// This is not the sum of leg durations.
    pub fn total_duration(&self) -> Duration {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }

    /// Returns the sum of leg prices.
    pub fn total_price(&self) -> f64 {
        self.segments.iter().map(|s| s.price()).sum()
    }

    /// Returns the layover before each leg after the first.
    pub fn layovers(&self) -> Vec<Duration> {
        self.segments
            .windows(2)
            .map(|w| w[1].departure().signed_duration_since(w[0].arrival()))
            .collect()
    }

    /// Returns the intermediate airports, in order.
    pub fn via(&self) -> Vec<Iata> {
        self.segments[..self.segments.len() - 1]
            .iter()
            .map(|s| s.destination())
            .collect()
    }

    /// Returns every airport touched, origin first.
    pub fn route(&self) -> Vec<Iata> {
        let mut route: Vec<Iata> = self.segments.iter().map(|s| s.origin()).collect();
        route.push(self.destination());
        route
    }

    /// Returns true if this is a single-leg itinerary.
    pub fn is_direct(&self) -> bool {
        self.leg_count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn seg(from: &str, to: &str, dep: (u32, u32), arr: (u32, u32), price: f64) -> Arc<Segment> {
        Arc::new(
            Segment::new(
                iata(from),
                iata(to),
                at(dep.0, dep.1),
                at(arr.0, arr.1),
                price,
            )
            .unwrap(),
        )
    }

    #[test]
    fn single_leg() {
        let itinerary =
            Itinerary::new(vec![seg("DEL", "BOM", (8, 0), (10, 0), 4000.0)]).unwrap();

        assert_eq!(itinerary.leg_count(), 1);
        assert_eq!(itinerary.change_count(), 0);
        assert!(itinerary.is_direct());
        assert_eq!(itinerary.origin(), iata("DEL"));
        assert_eq!(itinerary.destination(), iata("BOM"));
        assert_eq!(itinerary.departure_time(), at(8, 0));
        assert_eq!(itinerary.arrival_time(), at(10, 0));
        assert_eq!(itinerary.total_duration(), Duration::minutes(120));
        assert!(itinerary.layovers().is_empty());
        assert!(itinerary.via().is_empty());
    }

    #[test]
    fn two_legs_include_layover_in_duration() {
        let itinerary = Itinerary::new(vec![
            seg("DEL", "BOM", (8, 0), (10, 0), 4000.0),
            seg("BOM", "BLR", (11, 0), (12, 30), 3000.0),
        ])
        .unwrap();

        // 8:00 to 12:30, not 2h + 1h30
        assert_eq!(itinerary.total_duration(), Duration::minutes(270));
        assert_eq!(itinerary.layovers(), vec![Duration::minutes(60)]);
        assert_eq!(itinerary.via(), vec![iata("BOM")]);
        assert_eq!(
            itinerary.route(),
            vec![iata("DEL"), iata("BOM"), iata("BLR")]
        );
        assert_eq!(itinerary.total_price(), 7000.0);
        assert_eq!(itinerary.change_count(), 1);
        assert!(!itinerary.is_direct());
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            Itinerary::new(vec![]).unwrap_err(),
            DomainError::EmptyItinerary
        );
    }

    #[test]
    fn disconnected_rejected() {
        let err = Itinerary::new(vec![
            seg("DEL", "BOM", (8, 0), (10, 0), 0.0),
            seg("HYD", "BLR", (11, 0), (12, 0), 0.0),
        ])
        .unwrap_err();

        assert_eq!(err, DomainError::SegmentsNotConnected(iata("BOM"), iata("HYD")));
    }

    #[test]
    fn same_instance_twice_rejected() {
        let there = seg("DEL", "BOM", (8, 0), (8, 0), 0.0);
        let back = seg("BOM", "DEL", (8, 0), (8, 0), 0.0);

        let err = Itinerary::new(vec![there.clone(), back, there]).unwrap_err();
        assert_eq!(err, DomainError::RepeatedSegment);
    }

    #[test]
    fn identical_values_are_distinct_instances() {
        // Structurally identical segments are still different instances.
        let a = seg("DEL", "DEL", (8, 0), (8, 0), 0.0);
        let b = seg("DEL", "DEL", (8, 0), (8, 0), 0.0);
        assert_eq!(*a, *b);

        assert!(Itinerary::new(vec![a, b]).is_ok());
    }
}
