//! TOML document storage for the CMS-authored registries.
//!
//! Registries keep their whole document in memory and serialize access
//! through their own locks, so this layer only handles durable load/save.
//! Writes use the same tmp file + fsync + atomic rename discipline as the
//! JSON snapshot layer.

use marathon_core::error::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::PathBuf;

/// A handle to one TOML document on disk.
pub struct TomlDocFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> TomlDocFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new TOML document handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Loads and deserializes the document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let doc: T = toml::from_str(&content)?;
        Ok(Some(doc))
    }

    /// Saves the document atomically (tmp file + fsync + rename).
    pub fn save(&self, doc: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(doc)?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "doc.toml".to_string());
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.tmp", file_name));

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
