//! Error types for pixel dispatch.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised while posting pixel events.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The event collector could not be reached or rejected the batch.
    #[error("failed to post pixel batch: {0}")]
    Transport(#[from] reqwest::Error),
}
