//! Response payloads
//!
//! Wire shapes the API surface returns to its HTTP collaborator.

use serde::{Deserialize, Serialize};

use crate::registry::{FILE_OBJECT, FileRecord};

/// Object tag carried by list responses
pub const LIST_OBJECT: &str = "list";

/// Page of file records returned by the list handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesPage {
    pub data: Vec<FileRecord>,
    pub object: String,
}

impl ListFilesPage {
    pub fn new(data: Vec<FileRecord>) -> Self {
        Self {
            data,
            object: LIST_OBJECT.to_string(),
        }
    }
}

/// Confirmation returned after a successful delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDeleted {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

impl FileDeleted {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: FILE_OBJECT.to_string(),
            deleted: true,
        }
    }
}
