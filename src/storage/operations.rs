//! Storage operations
//!
//! File system operations for the upload directory: destination
//! resolution, upload writes, deletes, and content reads. Every failure is
//! terminal for the request that triggered it; there is no retry logic.

use log::{error, info, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::validation::{is_safe_path, sanitize_filename};

/// Resolves the on-disk destination for a client-supplied filename.
///
/// The filename is sanitized first, so the result always points at a
/// direct child of the upload directory.
pub fn resolve_upload_path(upload_dir: &Path, filename: &str) -> Result<PathBuf, StorageError> {
    let safe_name = sanitize_filename(filename);

    if !is_safe_path(Path::new(&safe_name)) {
        return Err(StorageError::InvalidPath(safe_name));
    }

    Ok(upload_dir.join(safe_name))
}

/// Prepares a destination for an upload, rejecting overwrites.
pub fn prepare_upload_path(upload_dir: &Path, filename: &str) -> Result<PathBuf, StorageError> {
    let file_path = resolve_upload_path(upload_dir, filename)?;

    // Check if file already exists
    if file_path.exists() {
        return Err(StorageError::FileAlreadyExists(
            file_path.to_string_lossy().to_string(),
        ));
    }

    Ok(file_path)
}

/// Copies an upload stream to its destination path.
///
/// A partial write is cleaned up so a failed upload leaves no file behind.
pub fn write_upload<R: Read>(file_path: &Path, content: &mut R) -> Result<u64, StorageError> {
    let mut file = match fs::File::create(file_path) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create file {}: {}", file_path.display(), e);
            return Err(StorageError::from(e));
        }
    };

    let written = match io::copy(content, &mut file).and_then(|n| file.flush().map(|_| n)) {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to write upload to {}: {}", file_path.display(), e);
            let _ = fs::remove_file(file_path);
            return Err(StorageError::from(e));
        }
    };

    info!("Stored upload at {} ({} bytes)", file_path.display(), written);
    Ok(written)
}

/// Deletes a stored file.
///
/// A file that is already gone is treated as success so that a record
/// whose backing file disappeared can still be deleted.
pub fn delete_file(upload_dir: &Path, filename: &str) -> Result<(), StorageError> {
    let file_path = resolve_upload_path(upload_dir, filename)?;

    match fs::remove_file(&file_path) {
        Ok(()) => {
            info!("Deleted file {}", file_path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("File {} already absent, continuing", file_path.display());
            Ok(())
        }
        Err(e) => {
            error!("Failed to delete file {}: {}", file_path.display(), e);
            Err(StorageError::from(e))
        }
    }
}

/// Reads the full contents of a stored file into memory.
pub fn read_file_contents(upload_dir: &Path, filename: &str) -> Result<Vec<u8>, StorageError> {
    let file_path = resolve_upload_path(upload_dir, filename)?;

    if !file_path.is_file() {
        return Err(StorageError::FileNotFound(
            file_path.to_string_lossy().to_string(),
        ));
    }

    fs::read(&file_path).map_err(|e| {
        error!("Failed to read file {}: {}", file_path.display(), e);
        StorageError::from(e)
    })
}
