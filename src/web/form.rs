//! Conversion of the HTML creation form into a JSON creation payload.

use serde::Deserialize;

use crate::api::dto::book::CreateBookRequest;
use crate::error::AppError;

/// Raw fields of the URL-encoded creation form. Extra fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct CreateBookForm {
    #[serde(default)]
    title: String,
    published: Option<String>,
    pages: Option<String>,
    #[serde(default)]
    genres: String,
    rating: Option<String>,
}

/// Parses a URL-encoded creation form and returns the equivalent JSON body.
///
/// `title` is taken verbatim, `genres` is split on commas with every entry
/// trimmed and empty entries dropped.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is not URL-encoded or if
/// `published`, `pages` or `rating` is absent or not a number.
pub fn form_to_json(body: &[u8]) -> Result<Vec<u8>, AppError> {
    let form: CreateBookForm = serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::validation(format!("malformed form: {e}")))?;

    let request = CreateBookRequest {
        published: parse_field("published", form.published)?,
        pages: parse_field("pages", form.pages)?,
        rating: parse_field("rating", form.rating)?,
        genres: split_genres(&form.genres),
        title: form.title,
    };

    serde_json::to_vec(&request).map_err(AppError::Encoding)
}

fn parse_field<T: std::str::FromStr>(name: &str, value: Option<String>) -> Result<T, AppError> {
    let value = value.ok_or_else(|| AppError::validation(format!("{name} is required")))?;
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{name} must be a number, got '{value}'")))
}

fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
