//! HTTP middleware shared by the API and the HTML pages.

pub mod cors;
pub mod tracing;
