//! Document File Storage Port - Filesystem operations interface.
//!
//! This port defines the contract for persisting exported documents. The
//! export action depends on this trait, while adapters (like
//! `LocalDocumentFileStorage`) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Port for filesystem operations on exported documents.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content visible on failure)
/// - Reject names that would escape the storage directory
/// - Compute SHA-256 checksums for integrity verification
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn DocumentFileStorage = get_storage();
///
/// let stored = storage.write("AI_Summary_20240101_120000.pdf", &bytes).await?;
/// let bytes = storage.read("AI_Summary_20240101_120000.pdf").await?;
/// ```
#[async_trait]
pub trait DocumentFileStorage: Send + Sync {
    /// Write document bytes under the given file name.
    ///
    /// Replaces an existing file of the same name.
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError>;

    /// Read document bytes back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError>;

    /// Get the full path a file name resolves to.
    fn file_path(&self, filename: &str) -> PathBuf;
}

/// A document that has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Where the file was written.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 checksum of the content.
    pub checksum: String,
}

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File name is empty or contains path components.
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    /// File not found.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exceeds the maximum allowed size.
    #[error("File too large: {size} bytes exceeds {max} byte limit")]
    FileTooLarge {
        /// Actual size.
        size: u64,
        /// Maximum allowed.
        max: u64,
    },

    /// I/O error during the operation.
    #[error("I/O error: {0}")]
    Io(String),
}

impl StorageError {
    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a file too large error.
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Create an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}
