//! Snapshot persistence
//!
//! Serializes the full record set to a JSON file under the upload
//! directory and restores it at startup. The snapshot is always rewritten
//! wholesale; it is never diffed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::registry::record::FileRecord;

/// Name of the snapshot file kept inside the upload directory
pub const SNAPSHOT_FILE_NAME: &str = "uploadedFiles.json";

/// Path of the snapshot inside the upload directory
pub fn snapshot_path(upload_dir: &Path) -> PathBuf {
    upload_dir.join(SNAPSHOT_FILE_NAME)
}

/// Writes the full record set to the snapshot file, overwriting it
pub fn save_snapshot(upload_dir: &Path, records: &[FileRecord]) -> Result<(), PersistenceError> {
    let json = serde_json::to_vec_pretty(records)?;
    fs::write(snapshot_path(upload_dir), json)?;
    Ok(())
}

/// Reads the record set back from the snapshot file
pub fn load_snapshot(upload_dir: &Path) -> Result<Vec<FileRecord>, PersistenceError> {
    let bytes = fs::read(snapshot_path(upload_dir))?;
    let records = serde_json::from_slice(&bytes)?;
    Ok(records)
}
