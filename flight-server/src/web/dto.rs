//! Data transfer objects for web requests and responses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::carriers::CarrierNames;
use crate::domain::{Iata, Itinerary, Segment};
use crate::planner::{Comparison, SearchMode};

/// Query parameters for `/search` and `/search/report`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Origin IATA code
    pub from: String,

    /// Destination IATA code
    pub to: String,

    /// Travel date (YYYY-MM-DD)
    pub date: String,

    /// `direct` or `connected` (defaults to connected)
    pub mode: Option<String>,

    /// Override for the maximum number of legs
    pub max_legs: Option<usize>,

    /// Override for the minimum layover (minutes)
    pub min_connection_mins: Option<i64>,

    /// Override for the maximum layover (minutes)
    pub max_connection_mins: Option<i64>,

    /// Override for the number of uninformed results
    pub max_results: Option<usize>,
}

/// A flight leg in an itinerary.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: Iata,
    pub to: Iata,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_mins: i64,
    pub price: f64,

    /// Carrier code, if the record had one
    pub carrier: Option<String>,

    /// Resolved airline display name
    pub airline: String,

    pub flight_number: Option<String>,
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment, carriers: &CarrierNames) -> Self {
        Self {
            from: segment.origin(),
            to: segment.destination(),
            departure: segment.departure(),
            arrival: segment.arrival(),
            duration_mins: segment.duration().num_minutes(),
            price: segment.price(),
            carrier: segment.carrier().map(|c| c.to_string()),
            airline: carriers.display_name(segment.carrier()).to_string(),
            flight_number: segment.flight_number().map(str::to_string),
        }
    }
}

/// An itinerary option.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub segments: Vec<SegmentResult>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,

    /// Total elapsed minutes, layovers included
    pub duration_mins: i64,

    pub price: f64,

    /// Layover before each leg after the first (minutes)
    pub layover_mins: Vec<i64>,

    /// Intermediate airports
    pub via: Vec<Iata>,
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary, carriers: &CarrierNames) -> Self {
        Self {
            segments: itinerary
                .segments()
                .iter()
                .map(|s| SegmentResult::from_segment(s, carriers))
                .collect(),
            departure_time: itinerary.departure_time(),
            arrival_time: itinerary.arrival_time(),
            duration_mins: itinerary.total_duration().num_minutes(),
            price: itinerary.total_price(),
            layover_mins: itinerary
                .layovers()
                .iter()
                .map(|gap| gap.num_minutes())
                .collect(),
            via: itinerary.via(),
        }
    }
}

/// Response for itinerary search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub date: NaiveDate,
    pub mode: SearchMode,

    /// Uninformed results, fastest first
    pub uninformed: Vec<ItineraryResult>,

    /// The informed search's single answer
    pub informed: Option<ItineraryResult>,

    pub states_explored: usize,
}

impl SearchResponse {
    pub fn from_comparison(date: NaiveDate, comparison: &Comparison, carriers: &CarrierNames) -> Self {
        Self {
            date,
            mode: comparison.mode,
            uninformed: comparison
                .uninformed
                .iter()
                .map(|it| ItineraryResult::from_itinerary(it, carriers))
                .collect(),
            informed: comparison
                .informed
                .as_ref()
                .map(|it| ItineraryResult::from_itinerary(it, carriers)),
            states_explored: comparison.states_explored,
        }
    }
}

/// Response listing every airport in the catalog.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub airports: Vec<Iata>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
