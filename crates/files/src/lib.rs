//! Jokes Upload Storage
//!
//! This crate is the blob sink for the jokes service: it persists uploaded file content into a
//! single directory, addressed by the name the client supplied.
//!
//! ## Storage Model
//!
//! ```text
//! <upload_dir>/
//! ├── cat.png
//! └── notes.txt
//! ```
//!
//! - Files are stored under their original name, flat, with no sharding
//! - A second upload with the same name overwrites the first
//! - Names must be a single plain path component; anything that could escape the directory is
//!   rejected
//!
//! ## Example Usage
//!
//! ```no_run
//! use jokes_files::UploadsService;
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), jokes_files::FilesError> {
//! let uploads = UploadsService::new(Path::new("uploads"))?;
//! let stored = uploads.store("notes.txt", b"hello").await?;
//! assert_eq!(stored.filename.as_str(), "notes.txt");
//! # Ok(())
//! # }
//! ```

mod uploads;

pub use uploads::{StoredUpload, UploadsService};

/// Errors that can occur during upload storage
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Upload directory path exists but is not a directory
    #[error("Invalid upload directory: {0}")]
    InvalidUploadDirectory(String),

    /// Client-supplied filename is empty or not a plain file name
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FilesResult<T> = std::result::Result<T, FilesError>;
