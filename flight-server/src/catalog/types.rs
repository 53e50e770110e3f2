//! Flight record DTOs.
//!
//! These types map directly to the records of the flight cache JSON feed.
//! Feeds disagree on field names, so every field is optional and alternate
//! spellings are kept as separate fields; conversion picks the first one
//! present.

use serde::Deserialize;

/// A single flight record as published by the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightRecord {
    /// Origin IATA code.
    pub from: Option<String>,

    /// Destination IATA code.
    pub to: Option<String>,

    /// Departure timestamp (preferred spelling).
    pub departure: Option<TimeField>,

    /// Departure timestamp (short spelling).
    pub dep: Option<TimeField>,

    /// Departure timestamp (legacy spelling).
    pub from_time: Option<TimeField>,

    /// Arrival timestamp (preferred spelling).
    pub arrival: Option<TimeField>,

    /// Arrival timestamp (short spelling).
    pub arr: Option<TimeField>,

    /// Arrival timestamp (legacy spelling).
    pub to_time: Option<TimeField>,

    /// Fare. Missing means zero.
    pub price: Option<f64>,

    /// Operating carrier code.
    pub carrier: Option<String>,

    /// Marketing carrier code, used when `carrier` is absent.
    #[serde(rename = "marketingCarrier")]
    pub marketing_carrier: Option<String>,

    /// Airline display name.
    pub airline: Option<String>,

    /// Flight number (preferred spelling).
    pub flight_number: Option<ScalarField>,

    /// Flight number (short spelling).
    pub number: Option<ScalarField>,
}

impl FlightRecord {
    /// The departure timestamp text, if any spelling carries one.
    pub fn departure_text(&self) -> Option<&str> {
        first_time(&[&self.departure, &self.dep, &self.from_time])
    }

    /// The arrival timestamp text, if any spelling carries one.
    pub fn arrival_text(&self) -> Option<&str> {
        first_time(&[&self.arrival, &self.arr, &self.to_time])
    }

    /// The carrier code text, preferring the operating carrier.
    pub fn carrier_text(&self) -> Option<&str> {
        non_empty(self.carrier.as_deref()).or_else(|| non_empty(self.marketing_carrier.as_deref()))
    }

    /// The flight number text, if any spelling carries one.
    pub fn flight_number_text(&self) -> Option<String> {
        self.flight_number
            .as_ref()
            .or(self.number.as_ref())
            .map(ScalarField::to_text)
            .filter(|s| !s.is_empty())
    }
}

/// A timestamp is either a bare string or an object carrying it under `at`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimeField {
    Text(String),
    Nested { at: Option<String> },
}

impl TimeField {
    pub fn text(&self) -> Option<&str> {
        match self {
            TimeField::Text(s) => Some(s.as_str()),
            TimeField::Nested { at } => at.as_deref(),
        }
    }
}

/// A value some feeds send as a string and others as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarField {
    Text(String),
    Number(i64),
}

impl ScalarField {
    pub fn to_text(&self) -> String {
        match self {
            ScalarField::Text(s) => s.trim().to_string(),
            ScalarField::Number(n) => n.to_string(),
        }
    }
}

fn first_time<'a>(candidates: &[&'a Option<TimeField>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_ref())
        .filter_map(TimeField::text)
        .find(|s| !s.is_empty())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_preferred_spellings() {
        let json = r#"{
            "from": "DEL",
            "to": "BOM",
            "departure": "2024-05-01T08:00:00",
            "arrival": "2024-05-01T10:00:00",
            "price": 4000,
            "carrier": "AI",
            "airline": "Air India",
            "flight_number": "AI-865"
        }"#;

        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.from.as_deref(), Some("DEL"));
        assert_eq!(record.departure_text(), Some("2024-05-01T08:00:00"));
        assert_eq!(record.arrival_text(), Some("2024-05-01T10:00:00"));
        assert_eq!(record.price, Some(4000.0));
        assert_eq!(record.carrier_text(), Some("AI"));
        assert_eq!(record.flight_number_text().as_deref(), Some("AI-865"));
    }

    #[test]
    fn deserialize_nested_and_alternate_spellings() {
        let json = r#"{
            "from": "DEL",
            "to": "BOM",
            "dep": { "at": "2024-05-01T08:00:00" },
            "to_time": "2024-05-01T10:00:00",
            "marketingCarrier": "6E",
            "number": 2031
        }"#;

        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.departure_text(), Some("2024-05-01T08:00:00"));
        assert_eq!(record.arrival_text(), Some("2024-05-01T10:00:00"));
        assert_eq!(record.price, None);
        assert_eq!(record.carrier_text(), Some("6E"));
        assert_eq!(record.flight_number_text().as_deref(), Some("2031"));
    }

    #[test]
    fn empty_values_fall_through() {
        let json = r#"{
            "departure": "",
            "dep": "2024-05-01T08:00:00",
            "carrier": "",
            "marketingCarrier": "SG",
            "flight_number": ""
        }"#;

        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.departure_text(), Some("2024-05-01T08:00:00"));
        assert_eq!(record.carrier_text(), Some("SG"));
        assert_eq!(record.flight_number_text(), None);
    }

    #[test]
    fn unknown_fields_ignored() {
        let json = r#"{ "from": "DEL", "cabin": "Y", "seats": 4 }"#;
        let record: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.from.as_deref(), Some("DEL"));
        assert_eq!(record.to, None);
    }
}
