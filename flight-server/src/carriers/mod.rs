//! Carrier name lookup.
//!
//! Maps IATA airline designators to display names. The table is an
//! explicit value handed to the presenter, so tests and deployments can
//! supply their own.

use std::collections::HashMap;

use crate::domain::CarrierCode;

/// Designators and names known without any catalog data.
const BUILTIN: &[(&str, &str)] = &[
    ("AI", "Air India"),
    ("SG", "SpiceJet"),
    ("UK", "Vistara"),
    ("6E", "IndiGo"),
    ("G8", "Go First"),
    ("IX", "Air India Express"),
    ("AK", "AirAsia"),
    ("QR", "Qatar Airways"),
    ("EK", "Emirates"),
    ("EY", "Etihad Airways"),
    ("BA", "British Airways"),
    ("LH", "Lufthansa"),
    ("TG", "Thai Airways"),
    ("UL", "SriLankan Airlines"),
    ("WY", "Oman Air"),
    ("KU", "Kuwait Airways"),
    ("TK", "Turkish Airlines"),
    ("FZ", "Flydubai"),
    ("VS", "Virgin Atlantic"),
    ("QF", "Qantas"),
    ("RJ", "Royal Jordanian"),
    ("ET", "Ethiopian Airlines"),
    ("CX", "Cathay Pacific"),
    ("MH", "Malaysia Airlines"),
    ("SQ", "Singapore Airlines"),
    ("H1", "Hahn Air"),
];

/// Shown when a segment carries no carrier code at all.
const UNKNOWN_CARRIER: &str = "NA";

/// Carrier code → display name mapping.
///
/// Lookups consult overrides first (typically names published in the
/// catalog), then the base table, then fall back to the code itself.
#[derive(Debug, Clone, Default)]
pub struct CarrierNames {
    base: HashMap<CarrierCode, String>,
    overrides: HashMap<CarrierCode, String>,
}

impl CarrierNames {
    /// Create an empty lookup; every carrier resolves to its code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lookup seeded with the well-known carriers.
    pub fn builtin() -> Self {
        let base = BUILTIN
            .iter()
            .filter_map(|(code, name)| {
                CarrierCode::parse(code)
                    .ok()
                    .map(|code| (code, (*name).to_string()))
            })
            .collect();

        Self {
            base,
            overrides: HashMap::new(),
        }
    }

    /// Layer overriding names on top of the base table.
    pub fn with_overrides(mut self, overrides: HashMap<CarrierCode, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Add or replace a base name.
    pub fn insert(&mut self, code: CarrierCode, name: impl Into<String>) {
        self.base.insert(code, name.into());
    }

    /// Look up a name, if one is known.
    pub fn get(&self, code: &CarrierCode) -> Option<&str> {
        self.overrides
            .get(code)
            .or_else(|| self.base.get(code))
            .map(String::as_str)
    }

    /// Name to display for a segment's carrier.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::carriers::CarrierNames;
    /// use flight_server::domain::CarrierCode;
    ///
    /// let names = CarrierNames::builtin();
    /// let indigo = CarrierCode::parse("6E").unwrap();
    /// let unknown = CarrierCode::parse("ZZ").unwrap();
    ///
    /// assert_eq!(names.display_name(Some(&indigo)), "IndiGo");
    /// assert_eq!(names.display_name(Some(&unknown)), "ZZ");
    /// assert_eq!(names.display_name(None), "NA");
    /// ```
    pub fn display_name<'a>(&'a self, code: Option<&'a CarrierCode>) -> &'a str {
        match code {
            Some(code) => self.get(code).unwrap_or(code.as_str()),
            None => UNKNOWN_CARRIER,
        }
    }

    /// Number of codes with a known name.
    pub fn len(&self) -> usize {
        self.base
            .keys()
            .chain(self.overrides.keys().filter(|k| !self.base.contains_key(k)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CarrierCode {
        CarrierCode::parse(s).unwrap()
    }

    #[test]
    fn builtin_table_complete() {
        let names = CarrierNames::builtin();
        assert_eq!(names.len(), BUILTIN.len());
        assert_eq!(names.get(&code("AI")), Some("Air India"));
        assert_eq!(names.get(&code("G8")), Some("Go First"));
        assert_eq!(names.get(&code("H1")), Some("Hahn Air"));
    }

    #[test]
    fn overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert(code("AI"), "Air India Ltd".to_string());
        overrides.insert(code("ZZ"), "Zed Air".to_string());

        let names = CarrierNames::builtin().with_overrides(overrides);
        assert_eq!(names.get(&code("AI")), Some("Air India Ltd"));
        assert_eq!(names.get(&code("ZZ")), Some("Zed Air"));
        assert_eq!(names.get(&code("SG")), Some("SpiceJet"));
        assert_eq!(names.len(), BUILTIN.len() + 1);
    }

    #[test]
    fn empty_lookup_falls_back_to_code() {
        let names = CarrierNames::new();
        assert!(names.is_empty());
        assert_eq!(names.display_name(Some(&code("AI"))), "AI");
    }

    #[test]
    fn insert_replaces_base() {
        let mut names = CarrierNames::new();
        names.insert(code("AI"), "Air India");
        names.insert(code("AI"), "Maharaja");
        assert_eq!(names.display_name(Some(&code("AI"))), "Maharaja");
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn missing_carrier() {
        assert_eq!(CarrierNames::builtin().display_name(None), "NA");
    }
}
