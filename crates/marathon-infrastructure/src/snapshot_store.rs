//! File-backed application snapshot store.
//!
//! Persists the [`AppSnapshot`] (live session + selected company) as a
//! single JSON document so a restart restores exactly where the candidate
//! left off. State is cached in memory to avoid repeated file I/O.

use crate::paths::MarathonPaths;
use crate::storage::AtomicJsonFile;
use async_trait::async_trait;
use marathon_core::error::{MarathonError, Result};
use marathon_core::snapshot::{AppSnapshot, SnapshotRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

/// JSON-file implementation of [`SnapshotRepository`].
///
/// All methods are async to support non-blocking I/O in async contexts;
/// actual file writes run on the blocking pool.
#[derive(Clone)]
pub struct JsonSnapshotStore {
    /// Cached snapshot loaded from storage.
    cache: Arc<Mutex<AppSnapshot>>,
    /// Atomic file handle for persistence.
    file: Arc<Mutex<AtomicJsonFile<AppSnapshot>>>,
}

impl JsonSnapshotStore {
    /// Creates a store over the snapshot file managed by `paths` and loads
    /// the initial state. A missing or empty file yields the default
    /// (no session, no selected company).
    pub fn new(paths: &MarathonPaths) -> Result<Self> {
        let file = AtomicJsonFile::new(paths.snapshot_file());
        let initial = file.load()?.unwrap_or_default();

        Ok(Self {
            cache: Arc::new(Mutex::new(initial)),
            file: Arc::new(Mutex::new(file)),
        })
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotStore {
    async fn load(&self) -> Result<AppSnapshot> {
        Ok(self.cache.lock().await.clone())
    }

    async fn save(&self, snapshot: &AppSnapshot) -> Result<()> {
        // Update in-memory cache first
        {
            let mut cache = self.cache.lock().await;
            *cache = snapshot.clone();
        }

        // Save to file storage in blocking context
        let file = self.file.clone();
        let snapshot_for_save = snapshot.clone();
        tokio::task::spawn_blocking(move || {
            let file = file.blocking_lock();
            file.save(&snapshot_for_save).map_err(MarathonError::from)
        })
        .await
        .map_err(|e| MarathonError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!("App snapshot persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        {
            let mut cache = self.cache.lock().await;
            *cache = AppSnapshot::default();
        }

        let file = self.file.clone();
        tokio::task::spawn_blocking(move || {
            let file = file.blocking_lock();
            file.remove().map_err(MarathonError::from)
        })
        .await
        .map_err(|e| MarathonError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!("App snapshot cleared");
        Ok(())
    }
}
