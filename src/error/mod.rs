//! Error handling
//!
//! Defines error types and handling for the file registry.

pub mod handlers;
pub mod types;

pub use handlers::{error_to_http_status, log_error};
pub use types::*;
