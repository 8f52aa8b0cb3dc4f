//! Top-level router combining the JSON API, HTML pages and static assets.
//!
//! # Route Structure
//!
//! - `/`, `/book/*`  - HTML pages
//! - `/v1/*`         - JSON API
//! - `/static/*`     - Static assets
//!
//! # Middleware
//!
//! - **CORS** - Request origin mirrored, credentials allowed
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds every route with its middleware, without path normalization.
///
/// `static_dir` is served under `/static`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .nest("/v1", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed
/// before routing.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
