//! Upload requests
//!
//! The validated upload payload handed over by the request-parsing
//! collaborator.

use std::io::Read;

/// An uploaded file part: the client filename, the declared payload size,
/// and the byte stream itself.
pub struct FileUpload<R: Read> {
    /// Filename as the client sent it; sanitized before touching disk
    pub filename: String,

    /// Declared payload size in bytes
    pub size: u64,

    /// The payload stream
    pub content: R,
}

impl<R: Read> FileUpload<R> {
    pub fn new(filename: impl Into<String>, size: u64, content: R) -> Self {
        Self {
            filename: filename.into(),
            size,
            content,
        }
    }
}
