//! Mapping proxy outcomes to HTTP responses.
//!
//! A missing identifier detected before any backend call becomes 400 with a
//! specific message. An undecodable body and every backend failure become
//! 500 with a generic per-operation message. Detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;

/// Error returned by the proxy handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: BackendError,
    },

    #[error("{message}")]
    Body {
        message: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::Body { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(message) => *message,
            Self::Upstream { message, .. } | Self::Body { message, .. } => *message,
        };
        (self.status(), message).into_response()
    }
}
