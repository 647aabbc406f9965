//! File registry
//!
//! The authoritative in-memory index of file records. All mutations and
//! the snapshot writes they trigger are serialized behind one lock, so
//! concurrent request workers cannot corrupt the set or interleave
//! snapshot writes. Snapshot failures are logged, never surfaced: the
//! request that triggered the mutation still succeeds.

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::registry::persistence::{load_snapshot, save_snapshot};
use crate::registry::record::FileRecord;

/// Registry of uploaded file records, shared by all request workers
pub struct FileRegistry {
    records: Mutex<Vec<FileRecord>>,
    upload_dir: PathBuf,
}

impl FileRegistry {
    /// Opens the registry for an upload directory, restoring the snapshot.
    ///
    /// A missing or unreadable snapshot is logged and the registry starts
    /// empty; startup never fails on snapshot state.
    pub fn open(upload_dir: impl Into<PathBuf>) -> Self {
        let upload_dir = upload_dir.into();

        if let Err(e) = fs::create_dir_all(&upload_dir) {
            warn!(
                "Failed to create upload directory {}: {}",
                upload_dir.display(),
                e
            );
        }

        let records = match load_snapshot(&upload_dir) {
            Ok(records) => {
                info!("Restored {} file records from snapshot", records.len());
                records
            }
            Err(e) => {
                warn!("Starting with an empty file registry: {}", e);
                Vec::new()
            }
        };

        Self {
            records: Mutex::new(records),
            upload_dir,
        }
    }

    /// Appends a record to the set and persists the full set
    pub fn add(&self, record: FileRecord) -> FileRecord {
        let mut records = self.lock();
        records.push(record.clone());
        self.persist(&records);
        record
    }

    /// Returns records in insertion order, optionally filtered by purpose.
    ///
    /// An unmatched filter yields an empty collection, not an error.
    pub fn list(&self, purpose: Option<&str>) -> Vec<FileRecord> {
        let records = self.lock();
        match purpose {
            Some(purpose) => records
                .iter()
                .filter(|r| r.purpose == purpose)
                .cloned()
                .collect(),
            None => records.clone(),
        }
    }

    /// Finds a record by id
    pub fn find_by_id(&self, id: &str) -> Option<FileRecord> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    /// Removes the record with the given id, preserving the order of the
    /// remainder, then persists the full set
    pub fn remove(&self, id: &str) -> Option<FileRecord> {
        let mut records = self.lock();
        let index = records.iter().position(|r| r.id == id)?;
        let removed = records.remove(index);
        self.persist(&records);
        Some(removed)
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Directory holding the uploaded files and the snapshot
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FileRecord>> {
        self.records.lock().expect("file registry lock poisoned")
    }

    // Best-effort snapshot write for the current set, called with the lock
    // held so snapshot writes cannot interleave.
    fn persist(&self, records: &[FileRecord]) {
        if let Err(e) = save_snapshot(&self.upload_dir, records) {
            error!("Failed to persist file registry snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::persistence::snapshot_path;
    use tempfile::TempDir;

    fn record(name: &str, purpose: &str) -> FileRecord {
        FileRecord::new(name, 1, purpose)
    }

    #[test]
    fn test_add_list_find_remove() {
        let dir = TempDir::new().unwrap();
        let registry = FileRegistry::open(dir.path());

        let a = registry.add(record("a.txt", "fine-tune"));
        let b = registry.add(record("b.txt", "classifications"));
        let c = registry.add(record("c.txt", "fine-tune"));

        let all = registry.list(None);
        assert_eq!(all, vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(registry.find_by_id(&b.id), Some(b.clone()));
        assert_eq!(registry.find_by_id("file-0-0-missing"), None);

        let removed = registry.remove(&b.id).unwrap();
        assert_eq!(removed.id, b.id);
        assert_eq!(registry.list(None), vec![a, c]);
    }

    #[test]
    fn test_list_filters_by_exact_purpose() {
        let dir = TempDir::new().unwrap();
        let registry = FileRegistry::open(dir.path());

        let a = registry.add(record("a.txt", "fine-tune"));
        registry.add(record("b.txt", "classifications"));
        let c = registry.add(record("c.txt", "fine-tune"));

        assert_eq!(registry.list(Some("fine-tune")), vec![a, c]);
        assert!(registry.list(Some("other")).is_empty());
    }

    #[test]
    fn test_list_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let registry = FileRegistry::open(dir.path());
        registry.add(record("a.txt", "fine-tune"));
        registry.add(record("b.txt", "fine-tune"));

        assert_eq!(registry.list(None), registry.list(None));
    }

    #[test]
    fn test_mutations_persist_to_snapshot() {
        let dir = TempDir::new().unwrap();
        let registry = FileRegistry::open(dir.path());

        let a = registry.add(record("a.txt", "fine-tune"));
        assert!(snapshot_path(dir.path()).exists());

        let reopened = FileRegistry::open(dir.path());
        assert_eq!(reopened.list(None), vec![a.clone()]);

        registry.remove(&a.id);
        let reopened = FileRegistry::open(dir.path());
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_open_without_snapshot_starts_empty() {
        let dir = TempDir::new().unwrap();
        let registry = FileRegistry::open(dir.path());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_open_creates_upload_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("uploads");
        let _registry = FileRegistry::open(&nested);
        assert!(nested.is_dir());
    }
}
