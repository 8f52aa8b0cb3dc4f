//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers an API that is
//! independent of the storage technology.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Reading list CRUD

pub mod services;
