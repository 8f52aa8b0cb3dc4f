//! HTML pages for browsing and adding books.
//!
//! Uses Askama templates under `templates/` for server-side rendering.
//!
//! # Modules
//!
//! - [`error`] - Page error responder
//! - [`form`] - Creation form parsing
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod error;
pub mod form;
pub mod handlers;
pub mod routes;
