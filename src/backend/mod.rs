//! Product backend integration.
//!
//! # Data Flow
//! ```text
//! proxy handler
//!     → client.rs (one reqwest call, configured timeout)
//!     → backend service
//!     → raw JSON body or BackendError
//! ```
//!
//! Failures never carry detail to the caller of the proxy; handlers log the
//! `BackendError` and answer with a generic message.

pub mod client;

pub use client::BackendClient;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the product backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Base URL could not be turned into endpoint URLs.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request did not complete within the configured timeout.
    #[error("Backend request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Connection or protocol failure.
    #[error("Backend transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Backend returned status {0}")]
    Status(StatusCode),

    /// Backend body was not JSON.
    #[error("Backend response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl BackendError {
    fn from_send(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Transport(error)
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid_url",
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}
