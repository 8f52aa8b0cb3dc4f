//! Single book page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub id: Option<String>,
}

/// Template for one book's details.
#[derive(Template, WebTemplate)]
#[template(path = "pages/view.html")]
pub struct ViewTemplate {
    pub book: Book,
    /// Creation time formatted for display, empty if unknown.
    pub created: String,
    /// Absolute URL of the book in the JSON API.
    pub api_url: String,
}

/// Renders a book by identifier.
///
/// # Endpoint
///
/// `GET /book/view?id={id}`
///
/// # Errors
///
/// Responds 404 if `id` is missing, empty, malformed or unknown.
pub async fn view_handler(
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
) -> Result<ViewTemplate, PageError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::invalid_identifier("missing id query parameter"))?;

    let book = state.book_service.get(&id).await?;

    Ok(ViewTemplate {
        created: book
            .created_at
            .map(|ts| ts.format("%d %b %Y at %H:%M").to_string())
            .unwrap_or_default(),
        api_url: format!("{}/v1/books/{}", state.site_url.trim_end_matches('/'), book.id),
        book,
    })
}
