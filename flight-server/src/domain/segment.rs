//! Flight segment type.
//!
//! A `Segment` is one scheduled flight leg. Segments are shared as
//! `Arc<Segment>` so that search paths can be extended cheaply; two paths
//! holding the same `Arc` hold the same segment instance.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::{CarrierCode, DomainError, Iata};

/// One scheduled flight leg.
///
/// # Invariants
///
/// - `arrival >= departure`
/// - `price` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    origin: Iata,
    destination: Iata,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    price: f64,
    carrier: Option<CarrierCode>,
    airline_name: Option<String>,
    flight_number: Option<String>,
}

impl Segment {
    /// Construct a segment, validating times and price.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arrival is before the departure or the price is
    /// negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::{Iata, Segment};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let dep = date.and_hms_opt(8, 0, 0).unwrap();
    /// let arr = date.and_hms_opt(10, 0, 0).unwrap();
    ///
    /// let seg = Segment::new(
    ///     Iata::parse("DEL").unwrap(),
    ///     Iata::parse("BOM").unwrap(),
    ///     dep,
    ///     arr,
    ///     4000.0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(seg.duration().num_minutes(), 120);
    /// assert!(Segment::new(seg.origin(), seg.destination(), arr, dep, 0.0).is_err());
    /// ```
    pub fn new(
        origin: Iata,
        destination: Iata,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        price: f64,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::InvalidSegment("arrival before departure"));
        }
        if !price.is_finite() {
            return Err(DomainError::InvalidSegment("price must be finite"));
        }
        if price < 0.0 {
            return Err(DomainError::InvalidSegment("price must be non-negative"));
        }

        Ok(Self {
            origin,
            destination,
            departure,
            arrival,
            price,
            carrier: None,
            airline_name: None,
            flight_number: None,
        })
    }

    /// Sets the operating carrier.
    pub fn with_carrier(mut self, carrier: CarrierCode) -> Self {
        self.carrier = Some(carrier);
        self
    }

    /// Sets the airline name published alongside the record.
    pub fn with_airline_name(mut self, name: impl Into<String>) -> Self {
        self.airline_name = Some(name.into());
        self
    }

    /// Sets the flight number.
    pub fn with_flight_number(mut self, number: impl Into<String>) -> Self {
        self.flight_number = Some(number.into());
        self
    }

    pub fn origin(&self) -> Iata {
        self.origin
    }

    pub fn destination(&self) -> Iata {
        self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn carrier(&self) -> Option<&CarrierCode> {
        self.carrier.as_ref()
    }

    pub fn airline_name(&self) -> Option<&str> {
        self.airline_name.as_deref()
    }

    pub fn flight_number(&self) -> Option<&str> {
        self.flight_number.as_deref()
    }

    /// Time in the air: arrival minus departure.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// The date the segment departs on. Date filtering is always by
    /// departure date.
    pub fn date(&self) -> NaiveDate {
        self.departure.date()
    }

    /// Returns true if the segment departs on `date`.
    pub fn departs_on(&self, date: NaiveDate) -> bool {
        self.date() == date
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

    #[test]
    fn valid_segment() {
        let seg = Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(10, 15), 4000.0)
            .unwrap()
            .with_carrier(CarrierCode::parse("AI").unwrap())
            .with_flight_number("AI-865");

        assert_eq!(seg.origin(), iata("DEL"));
        assert_eq!(seg.destination(), iata("BOM"));
        assert_eq!(seg.duration(), Duration::minutes(135));
        assert_eq!(seg.price(), 4000.0);
        assert_eq!(seg.carrier().map(|c| c.as_str()), Some("AI"));
        assert_eq!(seg.flight_number(), Some("AI-865"));
        assert_eq!(seg.airline_name(), None);
    }

    #[test]
    fn zero_duration_allowed() {
        let seg = Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(8, 0), 0.0).unwrap();
        assert_eq!(seg.duration(), Duration::zero());
    }

    #[test]
    fn arrival_before_departure_rejected() {
        let err = Segment::new(iata("DEL"), iata("BOM"), at(10, 0), at(8, 0), 1.0).unwrap_err();
        assert_eq!(err, DomainError::InvalidSegment("arrival before departure"));
    }

    #[test]
    fn bad_price_rejected() {
        assert!(Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(9, 0), -1.0).is_err());
        assert!(Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(9, 0), f64::NAN).is_err());
        assert!(
            Segment::new(iata("DEL"), iata("BOM"), at(8, 0), at(9, 0), f64::INFINITY).is_err()
        );
    }

    #[test]
    fn date_is_departure_date() {
        // Overnight flight departs on the 1st, arrives on the 2nd.
        let dep = at(23, 30);
        let arr = dep + Duration::hours(2);
        let seg = Segment::new(iata("DEL"), iata("BOM"), dep, arr, 0.0).unwrap();

        assert!(seg.departs_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(!seg.departs_on(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));
    }
}
