//! Core domain entities.
//!
//! The reading list has a single entity, [`Book`], with companion structs for
//! creation ([`NewBook`]) and partial updates ([`BookPatch`]). Entities are
//! plain data; they know nothing about how they are stored.

pub mod book;

pub use book::{Book, BookPatch, NewBook};
