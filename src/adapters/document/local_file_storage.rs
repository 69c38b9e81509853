//! Local Filesystem Storage Adapter - Implementation of DocumentFileStorage.
//!
//! Stores exported summary documents as flat files in one output directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{DocumentFileStorage, StorageError, StoredFile};

/// Maximum file size allowed (50 MB).
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Local filesystem storage for exported documents.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `.{name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{name}`
///
/// A failed write removes the temp file and leaves any previous file with
/// the same name untouched.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalDocumentFileStorage::new("./exports");
///
/// let stored = storage.write("AI_Summary_20240305_140709.pdf", &bytes).await?;
/// println!("Saved {} ({} bytes)", stored.path.display(), stored.size_bytes);
/// ```
#[derive(Debug, Clone)]
pub struct LocalDocumentFileStorage {
    /// Directory receiving every exported file.
    base_path: PathBuf,
}

impl LocalDocumentFileStorage {
    /// Creates a new local file storage rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the storage directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", filename))
    }

    /// Rejects names that are empty or would leave the storage directory.
    fn validate_name(filename: &str) -> Result<(), StorageError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
        if invalid {
            return Err(StorageError::invalid_name(filename));
        }
        Ok(())
    }

    /// Ensures the storage directory exists.
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        format!("{:x}", hasher.finalize())
    }

    async fn write_temp(&self, temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        // Sync to disk
        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl DocumentFileStorage for LocalDocumentFileStorage {
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError> {
        Self::validate_name(filename)?;

        // Check file size
        let size = content.len() as u64;
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        self.ensure_dir().await?;

        let temp_path = self.temp_path(filename);
        let final_path = self.file_path(filename);

        if let Err(e) = self.write_temp(&temp_path, content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        tracing::debug!(path = %final_path.display(), size_bytes = size, "document written");

        Ok(StoredFile {
            path: final_path,
            size_bytes: size,
            checksum: Self::compute_checksum(content),
        })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        Self::validate_name(filename)?;
        let path = self.file_path(filename);

        fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::not_found(filename)
            } else {
                StorageError::io(format!("Failed to read file {}: {}", path.display(), e))
            }
        })
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }
}
