//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that make a whole catalog unusable.
///
/// Individual malformed records are never reported here; they are dropped
/// during conversion.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of records
    #[error("catalog is not a JSON array of flight records: {0}")]
    Json(#[from] serde_json::Error),
}
