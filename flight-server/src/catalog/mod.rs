//! Flight segment catalog.
//!
//! Loads the flat list of scheduled flight records from the JSON flight
//! cache and converts them to validated domain segments. Records that
//! cannot be converted are dropped, never fatal.

mod convert;
mod error;
mod store;
mod types;

pub use convert::{ConversionError, convert_record, parse_timestamp};
pub use error::CatalogError;
pub use store::SegmentCatalog;
pub use types::{FlightRecord, ScalarField, TimeField};
