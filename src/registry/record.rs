//! File records
//!
//! Defines the metadata entry describing one uploaded file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Object tag carried by every file record
pub const FILE_OBJECT: &str = "file";

// Process-wide sequence appended to ids so uploads landing within the same
// second cannot collide.
static NEXT_FILE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Metadata entry describing one uploaded file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique identifier, generated at creation
    pub id: String,

    /// Type of the object, always "file"
    pub object: String,

    /// Size of the uploaded payload in bytes at creation time
    pub bytes: u64,

    /// The time at which the file was created
    pub created_at: DateTime<Utc>,

    /// Original client filename; the on-disk path uses the sanitized form
    pub filename: String,

    /// Caller-declared category (e.g. "fine-tune", "classifications")
    pub purpose: String,
}

impl FileRecord {
    /// Creates a record for a freshly stored upload with a unique id
    pub fn new(filename: impl Into<String>, bytes: u64, purpose: impl Into<String>) -> Self {
        let created_at = Utc::now();
        let seq = NEXT_FILE_SEQ.fetch_add(1, Ordering::Relaxed);

        Self {
            id: format!("file-{}-{}", created_at.timestamp(), seq),
            object: FILE_OBJECT.to_string(),
            bytes,
            created_at,
            filename: filename.into(),
            purpose: purpose.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_within_a_second() {
        let a = FileRecord::new("a.txt", 1, "fine-tune");
        let b = FileRecord::new("b.txt", 1, "fine-tune");
        let c = FileRecord::new("c.txt", 1, "fine-tune");
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert!(a.id.starts_with("file-"));
    }

    #[test]
    fn test_record_fields() {
        let record = FileRecord::new("train.jsonl", 42, "fine-tune");
        assert_eq!(record.object, FILE_OBJECT);
        assert_eq!(record.bytes, 42);
        assert_eq!(record.filename, "train.jsonl");
        assert_eq!(record.purpose, "fine-tune");
    }

    #[test]
    fn test_json_shape() {
        let record = FileRecord::new("train.jsonl", 10, "fine-tune");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["object"], "file");
        assert_eq!(json["bytes"], 10);
        assert_eq!(json["filename"], "train.jsonl");
        assert_eq!(json["purpose"], "fine-tune");
        // chrono serializes DateTime<Utc> as an RFC 3339 string
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }
}
