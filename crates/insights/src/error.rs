//! Error types for the insights engine.

use crate::model::ModelError;
use teampulse_storage::StorageError;

/// Result type for insight computations.
pub type Result<T> = std::result::Result<T, InsightError>;

/// Errors that can fail an insight computation.
///
/// Malformed record fields never surface here: they are recovered at the
/// gateway boundary. What remains is failed reads and failed model fits,
/// either of which fails the whole aggregate call (there is no
/// partial-result contract).
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    /// Record gateway read failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Statistical model fitting failed.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
