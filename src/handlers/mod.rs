//! Files API surface
//!
//! Handlers for upload, list, retrieve, delete, and content requests,
//! plus the request and response payload types they exchange with the
//! HTTP collaborator.

pub mod files;
pub mod requests;
pub mod responses;

pub use files::{handle_contents, handle_delete, handle_get, handle_list, handle_upload};
pub use requests::FileUpload;
pub use responses::{FileDeleted, ListFilesPage};
