//! Error types for the transport layer.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while issuing display requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The display API could not be reached.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint URL could not be assembled.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// The display API answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
