//! Error types
//!
//! Defines domain-specific error types for each module of the file registry.

use std::fmt;
use std::io;

/// Upload validation errors
#[derive(Debug)]
pub enum ValidationError {
    MissingFile,
    PurposeMissing,
    FileTooLarge { size: u64, limit: u64 },
    FileAlreadyExists(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFile => write!(f, "File is not provided"),
            ValidationError::PurposeMissing => write!(f, "Purpose is not defined"),
            ValidationError::FileTooLarge { size, limit } => {
                write!(f, "File size {} exceeds upload limit {}", size, limit)
            }
            ValidationError::FileAlreadyExists(name) => {
                write!(f, "File already exists: {}", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileNotFound(String),
    InvalidPath(String),
    FileAlreadyExists(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::FileAlreadyExists(p) => write!(f, "File already exists: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Snapshot persistence errors
///
/// Never surfaced to request callers: the registry logs these and keeps
/// serving from memory. The variants separate "could not encode the set"
/// from "could not reach the snapshot file" so the log tells an operator
/// which data is only in memory.
#[derive(Debug)]
pub enum PersistenceError {
    Serialize(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialize(e) => {
                write!(f, "Failed to serialize file records: {}", e)
            }
            PersistenceError::Io(e) => write!(f, "Failed to access snapshot file: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        PersistenceError::Serialize(error)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(error: io::Error) -> Self {
        PersistenceError::Io(error)
    }
}

/// General files API error that encompasses all request-scoped error types
#[derive(Debug)]
pub enum FilesApiError {
    Validation(ValidationError),
    NotFound(String),
    Storage(StorageError),
}

impl fmt::Display for FilesApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesApiError::Validation(e) => write!(f, "Validation error: {}", e),
            FilesApiError::NotFound(id) => write!(f, "unable to find file id {}", id),
            FilesApiError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for FilesApiError {}

// Implement conversions from specific errors to FilesApiError
impl From<ValidationError> for FilesApiError {
    fn from(error: ValidationError) -> Self {
        FilesApiError::Validation(error)
    }
}

impl From<StorageError> for FilesApiError {
    fn from(error: StorageError) -> Self {
        FilesApiError::Storage(error)
    }
}
