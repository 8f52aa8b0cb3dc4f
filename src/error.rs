//! Application error type shared by every layer.
//!
//! Storage and presentation failures are surfaced as [`AppError`] and turned
//! into an HTTP status by [`IntoResponse`]. Clients only ever see the
//! canonical status text; the full error is logged server-side.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The external identifier is empty or not a valid ObjectId.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("record not found")]
    NotFound,

    /// Connectivity, write, cursor or decode failure in the document store.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    /// Malformed request body, unknown fields, oversized body or bad form input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Response body could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(serde_json::Error),
}

impl AppError {
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status used by the JSON API.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_)
            | AppError::Timeout(_)
            | AppError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Logs `error` and builds a plain-text response carrying only the status text.
pub(crate) fn status_response(status: StatusCode, error: &AppError) -> Response {
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "request rejected");
    }

    let text = status.canonical_reason().unwrap_or("Error");
    (status, format!("{text}\n")).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        status_response(self.status_code(), &self)
    }
}
