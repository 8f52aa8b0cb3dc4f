//! Repository trait definitions for the domain layer.
//!
//! The trait here is the storage seam of the application: the service layer
//! depends on [`BookRepository`] only, and `crate::infrastructure::persistence`
//! provides the concrete stores.
//!
//! # Testing
//!
//! A `mockall` mock is generated under `cfg(test)`; integration tests in
//! `tests/` use the in-memory store instead.

pub mod book_repository;

pub use book_repository::BookRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
