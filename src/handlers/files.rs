//! File API handlers
//!
//! Handler functions for the files surface: upload, list, metadata lookup,
//! delete, and raw content retrieval. The HTTP collaborator parses the
//! request, calls a handler with validated inputs, and maps any error to a
//! status code via `error_to_http_status`.

use log::info;
use std::io::Read;

use crate::config::RegistryConfig;
use crate::error::{FilesApiError, StorageError, ValidationError};
use crate::handlers::requests::FileUpload;
use crate::handlers::responses::{FileDeleted, ListFilesPage};
use crate::registry::{FileRecord, FileRegistry};
use crate::storage;

/// Handles an upload: validates the payload, writes it to the upload
/// directory, and registers a new record.
///
/// # Arguments
///
/// * `registry` - The shared file registry.
/// * `config` - Registry configuration carrying the upload size limit.
/// * `upload` - The uploaded file part, if the request carried one.
/// * `purpose` - Caller-declared category for the file.
///
/// # Returns
///
/// * The created record on success; the registry is left unchanged on any
///   failure.
pub fn handle_upload<R: Read>(
    registry: &FileRegistry,
    config: &RegistryConfig,
    upload: Option<FileUpload<R>>,
    purpose: &str,
) -> Result<FileRecord, FilesApiError> {
    // 1. A request without a file part is a client error
    let mut upload = upload.ok_or(ValidationError::MissingFile)?;

    // 2. Check the declared size against the configured limit
    let limit = config.upload_limit_bytes();
    if upload.size > limit {
        return Err(ValidationError::FileTooLarge {
            size: upload.size,
            limit,
        }
        .into());
    }

    // 3. Purpose is required
    if purpose.is_empty() {
        return Err(ValidationError::PurposeMissing.into());
    }

    // 4. Sanitize the filename and resolve the destination, rejecting
    //    overwrites
    let file_path = match storage::prepare_upload_path(registry.upload_dir(), &upload.filename) {
        Ok(path) => path,
        Err(StorageError::FileAlreadyExists(name)) => {
            return Err(ValidationError::FileAlreadyExists(name).into());
        }
        Err(e) => return Err(e.into()),
    };

    // 5. Copy the payload to disk; a failure leaves the registry untouched
    storage::write_upload(&file_path, &mut upload.content)?;

    // 6. Register the new record; the snapshot write rides on add()
    let record = registry.add(FileRecord::new(&upload.filename, upload.size, purpose));

    info!(
        "Uploaded {} as {} ({} bytes, purpose {})",
        record.filename, record.id, record.bytes, record.purpose
    );

    Ok(record)
}

/// Handles a list request, optionally filtered by exact purpose
pub fn handle_list(registry: &FileRegistry, purpose: Option<&str>) -> ListFilesPage {
    ListFilesPage::new(registry.list(purpose))
}

/// Handles a metadata lookup by file id
pub fn handle_get(registry: &FileRegistry, file_id: &str) -> Result<FileRecord, FilesApiError> {
    registry
        .find_by_id(file_id)
        .ok_or_else(|| FilesApiError::NotFound(file_id.to_string()))
}

/// Handles a delete: removes the backing file, then the record.
///
/// A backing file that is already gone does not block the delete; any
/// other removal failure aborts before the registry is touched.
pub fn handle_delete(
    registry: &FileRegistry,
    file_id: &str,
) -> Result<FileDeleted, FilesApiError> {
    let record = handle_get(registry, file_id)?;

    storage::delete_file(registry.upload_dir(), &record.filename)?;

    registry.remove(&record.id);

    info!("Deleted {} ({})", record.id, record.filename);

    Ok(FileDeleted::new(record.id))
}

/// Handles a raw content read by file id.
///
/// The whole file is buffered in memory; there are no partial or range
/// reads.
pub fn handle_contents(registry: &FileRegistry, file_id: &str) -> Result<Vec<u8>, FilesApiError> {
    let record = handle_get(registry, file_id)?;

    let contents = storage::read_file_contents(registry.upload_dir(), &record.filename)?;

    Ok(contents)
}
