//! API route configuration.

use crate::api::handlers::{
    create_book_handler, delete_book_handler, get_book_handler, healthcheck_handler,
    list_books_handler, update_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Versioned JSON API, nested under `/v1`.
///
/// # Endpoints
///
/// - `GET    /healthcheck`  - Environment and version probe
/// - `GET    /books`        - List books
/// - `POST   /books`        - Create a book
/// - `GET    /books/{id}`   - Fetch a book
/// - `PUT    /books/{id}`   - Partially update a book
/// - `DELETE /books/{id}`   - Delete a book
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
}
