//! Catalog loading error types.

/// Errors raised while reading catalog files. Dropped dataset records are
/// not errors; see [`crate::IngestReport`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON.
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The planet manifest is not valid RON.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// A dataset row has the wrong shape or a non-numeric field.
    #[error("malformed record {index}: {reason}")]
    MalformedRecord {
        /// Zero-based row index in the dataset.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}
