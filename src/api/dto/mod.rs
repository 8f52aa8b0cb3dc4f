//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs reject unknown fields; response DTOs are single-key
//! envelopes rendered by [`crate::api::response::JsonEnvelope`].

pub mod book;
pub mod health;
