//! HTML page handlers.

pub mod create;
pub mod home;
pub mod view;

pub use create::{create_form_handler, create_submit_handler};
pub use home::home_handler;
pub use view::view_handler;
