//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::BookService;
use crate::domain::repositories::BookRepository;

/// Reading list service over whichever repository the process was built with.
pub type DynBookService = BookService<dyn BookRepository>;

/// Immutable per-process state, cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<DynBookService>,
    pub environment: String,
    pub version: String,
    pub site_url: String,
}

impl AppState {
    /// Builds the state around `repository`.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        environment: impl Into<String>,
        version: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            book_service: Arc::new(BookService::new(repository)),
            environment: environment.into(),
            version: version.into(),
            site_url: site_url.into(),
        }
    }
}
