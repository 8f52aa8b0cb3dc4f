//! Repository trait for book data access.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capabilities needed by the reading list.
///
/// Every implementation parses external identifiers itself and reports
/// [`AppError::InvalidIdentifier`] before touching storage when an identifier
/// is empty or malformed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoBookRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::InMemoryBookRepository`] - in-process store for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persists a new book.
    ///
    /// Assigns a fresh identifier and sets `created_at` to now unless it is
    /// already set. Returns the stored record with both populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Timeout`] on write failure.
    async fn create(&self, book: Book) -> Result<Book, AppError>;

    /// Finds a book by its external identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `id` is empty or malformed.
    /// Returns [`AppError::NotFound`] if no document matches.
    async fn get(&self, id: &str) -> Result<Book, AppError>;

    /// Lists every book in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the query, the cursor or decoding any
    /// document fails.
    async fn get_all(&self) -> Result<Vec<Book>, AppError>;

    /// Replaces all mutable fields of the book identified by `book.id`.
    ///
    /// Returns `Ok(false)` when no document matched; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `book.id` is empty or malformed.
    async fn update(&self, book: Book) -> Result<bool, AppError>;

    /// Removes the book(s) matching `id`.
    ///
    /// Returns `Ok(false)` when nothing was removed; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdentifier`] if `id` is empty or malformed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
