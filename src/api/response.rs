//! JSON envelope rendering.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::AppError;

/// Serializes `value` as tab-indented JSON followed by a newline.
///
/// # Errors
///
/// Returns [`AppError::Encoding`] if `value` cannot be represented as JSON.
pub fn render_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut body = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"\t"));

    value
        .serialize(&mut serializer)
        .map_err(AppError::Encoding)?;

    body.push(b'\n');
    Ok(body)
}

/// Response wrapper writing a typed envelope with [`render_json`].
#[derive(Debug)]
pub struct JsonEnvelope<T>(pub T);

impl<T: Serialize> IntoResponse for JsonEnvelope<T> {
    fn into_response(self) -> Response {
        match render_json(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => e.into_response(),
        }
    }
}
