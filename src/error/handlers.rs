//! Error handlers
//!
//! Logging and status-code mapping for request-scoped errors.

use crate::error::types::FilesApiError;
use log::error;

/// Log a files API error
pub fn log_error(err: &FilesApiError) {
    error!("Files API error: {}", err);
}

/// Convert an error to the HTTP status code the API surface reports
pub fn error_to_http_status(err: &FilesApiError) -> u16 {
    match err {
        FilesApiError::Validation(_) => 400,
        FilesApiError::NotFound(_) => 404,
        FilesApiError::Storage(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::{StorageError, ValidationError};

    #[test]
    fn test_status_mapping() {
        let validation = FilesApiError::from(ValidationError::PurposeMissing);
        assert_eq!(error_to_http_status(&validation), 400);

        let not_found = FilesApiError::NotFound("file-0".to_string());
        assert_eq!(error_to_http_status(&not_found), 404);

        let storage = FilesApiError::from(StorageError::FileNotFound("a.txt".to_string()));
        assert_eq!(error_to_http_status(&storage), 500);
    }
}
