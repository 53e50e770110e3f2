//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from catalog I/O errors and from search configuration
//! errors.

use super::Iata;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Invalid segment construction (e.g., arrives before it departs)
    #[error("invalid segment: {0}")]
    InvalidSegment(&'static str),

    /// Consecutive segments don't chain
    #[error("segments do not connect: arrives at {0}, next departs from {1}")]
    SegmentsNotConnected(Iata, Iata),

    /// The same segment instance appears twice in one itinerary
    #[error("itinerary uses the same segment more than once")]
    RepeatedSegment,

    /// Itinerary has no segments
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,
}
