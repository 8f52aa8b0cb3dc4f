//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_form_handler, create_submit_handler, home_handler, view_handler,
};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`              - List of all books
/// - `GET  /book/view`     - Single book, selected by `?id=`
/// - `GET  /book/create`   - Creation form
/// - `POST /book/create`   - Form submission, redirects to `/`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/book/view", get(view_handler))
        .route(
            "/book/create",
            get(create_form_handler).post(create_submit_handler),
        )
}
