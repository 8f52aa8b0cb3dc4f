//! Book repository implementations.
//!
//! # Repositories
//!
//! - [`MongoBookRepository`] - MongoDB storage, one bounded call per operation
//! - [`InMemoryBookRepository`] - process-local storage with the same semantics,
//!   used by the HTTP integration tests
//!
//! Both share [`parse_object_id`] so identifier validation is identical.

mod book_document;
pub mod memory_book_repository;
pub mod mongo_book_repository;

pub use memory_book_repository::InMemoryBookRepository;
pub use mongo_book_repository::{DEFAULT_STORAGE_TIMEOUT, MongoBookRepository};

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

/// Parses an external identifier into the store-native form.
///
/// # Errors
///
/// Returns [`AppError::InvalidIdentifier`] if `id` is empty or is not a
/// 24-digit hex ObjectId.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    if id.is_empty() {
        return Err(AppError::invalid_identifier("empty identifier"));
    }

    ObjectId::parse_str(id).map_err(|e| AppError::invalid_identifier(format!("{id:?}: {e}")))
}
