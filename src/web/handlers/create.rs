//! Book creation form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Redirect},
};

use crate::api::dto::book::CreateBookRequest;
use crate::api::extract::decode_json;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::form::form_to_json;

/// Template for the creation form.
#[derive(Template, WebTemplate)]
#[template(path = "pages/create.html")]
pub struct CreateTemplate {}

/// Renders the creation form.
///
/// # Endpoint
///
/// `GET /book/create`
pub async fn create_form_handler() -> impl IntoResponse {
    CreateTemplate {}
}

/// Creates a book from the submitted form and redirects to the list.
///
/// # Endpoint
///
/// `POST /book/create`
///
/// # Response
///
/// `303 See Other` to `/`. Every failure, including bad input, is a 500.
pub async fn create_submit_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Redirect, PageError> {
    let json = form_to_json(&body).map_err(PageError::server)?;
    let request: CreateBookRequest = decode_json(&json).map_err(PageError::server)?;

    let (id, _) = state
        .book_service
        .insert(request.into())
        .await
        .map_err(PageError::server)?;

    tracing::info!(id = %id, "book created from form");

    Ok(Redirect::to("/"))
}
