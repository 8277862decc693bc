use crate::types::date_key::InvalidDateKey;
use thiserror::Error;

/// Errors raised while requesting or decoding a POWER daily payload.
#[derive(Debug, Error)]
pub enum PowerApiError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Malformed response body from {url}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed date key in response")]
    MalformedDateKey(#[from] InvalidDateKey),
}
