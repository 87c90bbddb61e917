//! Failures surfaced by the backend client.

use thiserror::Error;

/// Everything that can go wrong talking to the booking backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base address is not a usable absolute URL.
    #[error("invalid backend base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never completed (DNS, connect, timeout, broken body).
    #[error("backend transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    /// The backend answered 2xx but the body had an unexpected shape.
    #[error("backend response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status carried by the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
