//! Conversion from flight record DTOs to domain types.

use chrono::{DateTime, NaiveDateTime};

use crate::domain::{CarrierCode, Iata, Segment};

use super::types::FlightRecord;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse an IATA code
    #[error("invalid IATA code: {0}")]
    InvalidIata(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Fields parsed but the segment is inconsistent
    #[error("invalid segment: {0}")]
    InvalidSegment(String),
}

/// Naive layouts tried in order before falling back to offset-aware parsing.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp.
///
/// Timestamps carrying a UTC offset keep their local wall-clock time: a
/// flight departing "08:00+05:30" departs at 08:00 on the schedule.
///
/// # Examples
///
/// ```
/// use flight_server::catalog::parse_timestamp;
///
/// let t = parse_timestamp("2024-05-01T08:00:00+05:30").unwrap();
/// assert_eq!(t.to_string(), "2024-05-01 08:00:00");
///
/// assert!(parse_timestamp("08:00").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ConversionError> {
    let s = s.trim();

    for format in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.naive_local());
    }

    if let Ok(t) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Ok(t.naive_local());
    }

    Err(ConversionError::InvalidTimestamp(s.to_string()))
}

/// Convert a single flight record to a segment.
pub fn convert_record(record: &FlightRecord) -> Result<Segment, ConversionError> {
    let origin = parse_endpoint(record.from.as_deref(), "from")?;
    let destination = parse_endpoint(record.to.as_deref(), "to")?;

    let departure = record
        .departure_text()
        .ok_or(ConversionError::MissingField("departure"))
        .and_then(parse_timestamp)?;
    let arrival = record
        .arrival_text()
        .ok_or(ConversionError::MissingField("arrival"))
        .and_then(parse_timestamp)?;

    let price = record.price.unwrap_or(0.0);

    let mut segment = Segment::new(origin, destination, departure, arrival, price)
        .map_err(|e| ConversionError::InvalidSegment(e.to_string()))?;

    // An unreadable carrier code is not worth dropping the flight for.
    if let Some(carrier) = record
        .carrier_text()
        .and_then(|c| CarrierCode::parse_normalized(c).ok())
    {
        segment = segment.with_carrier(carrier);
    }

    if let Some(name) = record.airline.as_deref().filter(|n| !n.is_empty()) {
        segment = segment.with_airline_name(name);
    }

    if let Some(number) = record.flight_number_text() {
        segment = segment.with_flight_number(number);
    }

    Ok(segment)
}

fn parse_endpoint(value: Option<&str>, field: &'static str) -> Result<Iata, ConversionError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or(ConversionError::MissingField(field))?;
    Iata::parse_normalized(value).map_err(|_| ConversionError::InvalidIata(value.to_string()))
}
