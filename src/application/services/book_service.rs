//! Reading list service.

use std::sync::Arc;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting books.
///
/// Holds no business rules beyond shaping records; everything else is
/// delegated to the repository and errors propagate unchanged. The repository
/// may be unsized, so production code can run over `dyn BookRepository`.
pub struct BookService<R: BookRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Builds a book from the creation payload and persists it.
    ///
    /// Returns the store-assigned identifier together with the persisted
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Timeout`] on write failure.
    pub async fn insert(&self, input: NewBook) -> Result<(String, Book), AppError> {
        let book = self.repository.create(Book::from(input)).await?;
        Ok((book.id.clone(), book))
    }

    /// Lists every book.
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        self.repository.get_all().await
    }

    /// Retrieves a book by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] for a malformed identifier and
    /// [`AppError::NotFound`] if no book matches.
    pub async fn get(&self, id: &str) -> Result<Book, AppError> {
        self.repository.get(id).await
    }

    /// Stores `book` under identifier `id`.
    ///
    /// Returns `Ok(false)` if no stored book matched.
    pub async fn update(&self, id: &str, mut book: Book) -> Result<bool, AppError> {
        book.id = id.to_string();
        self.repository.update(book).await
    }

    /// Deletes a book by identifier.
    ///
    /// Returns `Ok(false)` if nothing was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }

    /// Applies a partial update to a record without touching storage.
    pub fn apply_patch(mut book: Book, patch: BookPatch) -> Book {
        patch.apply_to(&mut book);
        book
    }
}
