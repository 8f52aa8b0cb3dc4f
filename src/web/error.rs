//! Error responder for HTML pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, status_response};

/// Page failure: 404 for unknown or malformed identifiers, 500 otherwise.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    source: AppError,
}

impl PageError {
    /// Reports `source` as a server error whatever its kind.
    pub fn server(source: AppError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source,
        }
    }
}

impl From<AppError> for PageError {
    fn from(source: AppError) -> Self {
        let status = match source {
            AppError::NotFound | AppError::InvalidIdentifier(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, source }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        status_response(self.status, &self.source)
    }
}
