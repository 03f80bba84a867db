//! Error types for display queries.

use thiserror::Error;

use opine_client::ClientError;

use crate::model::ApiError;

/// Result type for display queries.
pub type ConversationsResult<T> = Result<T, ConversationsError>;

/// Errors raised while running a display query.
#[derive(Debug, Error)]
pub enum ConversationsError {
    /// The transport layer failed before a valid envelope was decoded.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The display API returned an envelope flagged with request errors.
    #[error("display request rejected: {}", render_errors(.errors))]
    Api {
        /// The reported errors.
        errors: Vec<ApiError>,
    },
}

fn render_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error details provided".to_owned();
    }
    errors
        .iter()
        .map(|error| {
            let code = error.code.as_deref().unwrap_or("UNKNOWN");
            let message = error.message.as_deref().unwrap_or("no message");
            format!("{code}: {message}")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
