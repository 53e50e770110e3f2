//! In-memory segment catalog.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{CarrierCode, Iata, Segment};

use super::convert::convert_record;
use super::error::CatalogError;
use super::types::FlightRecord;

/// A read-only, already-loaded collection of flight segments for any
/// number of dates.
///
/// Catalog order is preserved; it is the tie-break order used by the
/// planner when two itineraries cost the same.
#[derive(Debug, Clone, Default)]
pub struct SegmentCatalog {
    segments: Vec<Arc<Segment>>,
    dropped: usize,
}

impl SegmentCatalog {
    /// Build a catalog from already-validated segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().map(Arc::new).collect(),
            dropped: 0,
        }
    }

    /// Parse a catalog from a JSON array of flight records.
    ///
    /// Records that cannot be turned into a segment are skipped and
    /// counted in [`SegmentCatalog::dropped`].
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the document itself is not a JSON array.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::catalog::SegmentCatalog;
    ///
    /// let json = r#"[
    ///     {"from": "DEL", "to": "BOM", "departure": "2024-05-01T08:00:00",
    ///      "arrival": "2024-05-01T10:00:00", "price": 4000},
    ///     {"from": "DEL", "departure": "2024-05-01T09:00:00",
    ///      "arrival": "2024-05-01T11:00:00"}
    /// ]"#;
    ///
    /// let catalog = SegmentCatalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.dropped(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

        let mut segments = Vec::with_capacity(values.len());
        let mut dropped = 0;

        for (index, value) in values.into_iter().enumerate() {
            let converted = serde_json::from_value::<FlightRecord>(value)
                .map_err(|e| e.to_string())
                .and_then(|record| convert_record(&record).map_err(|e| e.to_string()));

            match converted {
                Ok(segment) => segments.push(Arc::new(segment)),
                Err(reason) => {
                    debug!(index, %reason, "Skipping malformed flight record");
                    dropped += 1;
                }
            }
        }

        Ok(Self { segments, dropped })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All segments, in catalog order.
    pub fn segments(&self) -> &[Arc<Segment>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of records skipped while loading.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Segments departing on `date`, in catalog order.
    pub fn on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Arc<Segment>> {
        self.segments.iter().filter(move |s| s.departs_on(date))
    }

    /// Every airport appearing as an origin or destination, sorted.
    pub fn airports(&self) -> BTreeSet<Iata> {
        self.segments
            .iter()
            .flat_map(|s| [s.origin(), s.destination()])
            .collect()
    }

    /// Returns true if any segment touches `airport`.
    pub fn contains_airport(&self, airport: &Iata) -> bool {
        self.segments
            .iter()
            .any(|s| &s.origin() == airport || &s.destination() == airport)
    }

    /// Airline names published alongside carrier codes in the records.
    ///
    /// When a carrier is published with several names, the last one wins.
    pub fn carrier_names(&self) -> HashMap<CarrierCode, String> {
        self.segments
            .iter()
            .filter_map(|s| Some((*s.carrier()?, s.airline_name()?.to_string())))
            .collect()
    }
}
