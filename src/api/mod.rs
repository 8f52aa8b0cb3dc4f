//! JSON API layer.
//!
//! Translates HTTP requests into [`BookService`](crate::application::services::BookService)
//! calls and formats responses as single-key JSON envelopes.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`extract`] - Strict JSON body extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`response`] - Tab-indented JSON responder
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
