//! Error kinds surfaced by the coin feed.

use thiserror::Error;

/// Failures a listing can end up in.
///
/// Everything except `EmptyDataWithFilteredApplied` is produced by the fetch
/// client. That one is raised by the front end when filters leave an empty
/// listing, so it can offer to clear them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid feed URL")]
    InvalidUrl,

    /// Transport failure: connection refused, timeout, truncated body.
    #[error("No data received from the feed")]
    NoData,

    /// Non-2xx response; carries the response body as text.
    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Failed to decode the feed response")]
    DecodingError,

    #[error("No coins match the applied filters")]
    EmptyDataWithFilteredApplied,

    #[error("Request failed")]
    RequestFailed,
}

impl FetchError {
    /// Stable identifier used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl => "invalid_url",
            FetchError::NoData => "no_data",
            FetchError::ServerError(_) => "server_error",
            FetchError::DecodingError => "decoding_error",
            FetchError::EmptyDataWithFilteredApplied => "empty_filtered",
            FetchError::RequestFailed => "request_failed",
        }
    }
}
