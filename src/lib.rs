//! # Reading List
//!
//! A personal reading list with server-rendered HTML pages and a JSON REST
//! API, built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The book entity and the repository trait
//! - **Application Layer** ([`application`]) - The book service
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory repositories
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML pages for browsing and adding books
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_URL="mongodb://localhost:27017"
//! export ENV="development"
//! export PORT="4000"
//! export SITE_URL="http://localhost:4000"
//! export VERSION="1.0.0"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BookService;
    pub use crate::domain::entities::{Book, BookPatch, NewBook};
    pub use crate::domain::repositories::BookRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryBookRepository, MongoBookRepository};
    pub use crate::state::AppState;
}
