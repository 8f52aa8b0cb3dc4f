//! Strict JSON request body decoding.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Largest request body accepted by the JSON API.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// JSON body extractor with the API's decoding rules.
///
/// Unlike [`axum::Json`] it ignores the `Content-Type` header, caps the body
/// at [`MAX_BODY_BYTES`] and reports every failure as
/// [`AppError::Validation`]. Unknown fields are rejected by the target type
/// (`#[serde(deny_unknown_fields)]`).
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|e| {
                AppError::validation(format!(
                    "body must not be larger than {MAX_BODY_BYTES} bytes: {e}"
                ))
            })?;

        decode_json(&bytes).map(StrictJson)
    }
}

/// Decodes exactly one JSON value from `bytes`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is larger than
/// [`MAX_BODY_BYTES`], is empty or malformed, has fields the target does not
/// know, or carries anything but whitespace after the first value.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.len() > MAX_BODY_BYTES {
        return Err(AppError::validation(format!(
            "body must not be larger than {MAX_BODY_BYTES} bytes"
        )));
    }

    serde_json::from_slice(bytes).map_err(|e| AppError::validation(format!("malformed JSON: {e}")))
}
