//! Handlers for the book endpoints.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::book::{
    BookEnvelope, BooksEnvelope, CreateBookRequest, MessageEnvelope, UpdateBookRequest,
};
use crate::api::extract::StrictJson;
use crate::api::response::JsonEnvelope;
use crate::error::AppError;
use crate::state::{AppState, DynBookService};

/// Lists every book.
///
/// # Endpoint
///
/// `GET /v1/books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<JsonEnvelope<BooksEnvelope>, AppError> {
    let books = state.book_service.get_all().await?;

    Ok(JsonEnvelope(BooksEnvelope {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /v1/books`
///
/// # Request Body
///
/// ```json
/// {"title": "Dune", "published": 1965, "pages": 412, "genres": ["Sci-Fi"], "rating": 4.8}
/// ```
///
/// # Response
///
/// `201 Created` with `Location: v1/books/{id}` and the stored book.
///
/// # Errors
///
/// Returns 400 if the body is oversized, malformed or has unknown fields.
pub async fn create_book_handler(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateBookRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (id, book) = state.book_service.insert(payload.into()).await?;

    tracing::info!(id = %id, title = %book.title, "book created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("v1/books/{id}"))],
        JsonEnvelope(BookEnvelope::from(book)),
    ))
}

/// Fetches one book.
///
/// # Endpoint
///
/// `GET /v1/books/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 if no book matches.
pub async fn get_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<JsonEnvelope<BookEnvelope>, AppError> {
    let book = state.book_service.get(&id).await?;

    Ok(JsonEnvelope(book.into()))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PUT /v1/books/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; an empty
/// `genres` list is ignored.
///
/// ```json
/// {"title": "Dune Messiah", "rating": 4.1}
/// ```
///
/// # Errors
///
/// Returns 400 for a malformed identifier or body.
/// Returns 404 if the book does not exist, including when it disappears
/// between the read and the write.
pub async fn update_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<UpdateBookRequest>,
) -> Result<JsonEnvelope<BookEnvelope>, AppError> {
    let existing = state.book_service.get(&id).await?;
    let book = DynBookService::apply_patch(existing, payload.into());

    if !state.book_service.update(&id, book.clone()).await? {
        return Err(AppError::NotFound);
    }

    Ok(JsonEnvelope(book.into()))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /v1/books/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 if nothing was deleted.
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<JsonEnvelope<MessageEnvelope>, AppError> {
    if !state.book_service.delete(&id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(id = %id, "book deleted");

    Ok(JsonEnvelope(MessageEnvelope {
        message: "book successfully deleted",
    }))
}
