//! Upload directory service.
//!
//! [`UploadsService`] owns one directory and writes uploaded bytes into it by client-supplied
//! name. It is cheap to clone and safe to share across request handlers.

use crate::{FilesError, FilesResult};
use jokes_types::NonEmptyText;
use std::path::{Component, Path, PathBuf};

/// Record of a completed upload.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct StoredUpload {
    /// Name the file was stored under (the client's original filename)
    pub filename: NonEmptyText,

    /// Number of bytes written
    pub size_bytes: u64,

    /// Sniffed media type, best-effort only
    pub media_type: Option<String>,
}

/// Writes uploads into a single directory.
#[derive(Debug, Clone)]
pub struct UploadsService {
    upload_dir: PathBuf,
}

impl UploadsService {
    /// Creates the service, creating `upload_dir` (and parents) if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `upload_dir` exists but is not a directory
    /// - the directory cannot be created (I/O)
    pub fn new(upload_dir: &Path) -> FilesResult<Self> {
        if upload_dir.exists() {
            if !upload_dir.is_dir() {
                return Err(FilesError::InvalidUploadDirectory(format!(
                    "Path is not a directory: {}",
                    upload_dir.display()
                )));
            }
        } else {
            std::fs::create_dir_all(upload_dir)?;
            tracing::info!("Created uploads directory {}", upload_dir.display());
        }

        Ok(Self {
            upload_dir: upload_dir.to_path_buf(),
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Writes `bytes` to `<upload_dir>/<original_filename>`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - the filename is empty or is not a single plain path component
    /// - the write fails (I/O)
    pub async fn store(
        &self,
        original_filename: &str,
        bytes: &[u8],
    ) -> FilesResult<StoredUpload> {
        let filename = validate_filename(original_filename)?;
        let target = self.upload_dir.join(filename.as_str());

        tokio::fs::write(&target, bytes).await.map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write upload to {}: {}", target.display(), e),
            ))
        })?;

        let media_type = infer::get(bytes).map(|kind| kind.mime_type().to_string());

        Ok(StoredUpload {
            filename,
            size_bytes: bytes.len() as u64,
            media_type,
        })
    }
}

/// Accept only names that resolve to exactly one normal component inside the directory.
fn validate_filename(name: &str) -> FilesResult<NonEmptyText> {
    let invalid = || FilesError::InvalidFilename(name.to_string());

    if name.is_empty() || name.trim() != name || name.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => {}
        _ => return Err(invalid()),
    }

    NonEmptyText::new(name).map_err(|_| invalid())
}
