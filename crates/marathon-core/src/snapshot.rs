//! Persisted application snapshot.
//!
//! The session and the selected company survive a reload via a single
//! JSON blob stored under a fixed key. No schema versioning or migration:
//! the snapshot must round-trip the session shape exactly.

use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The fixed-key snapshot persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    /// Company the candidate last picked, if any.
    #[serde(default)]
    pub selected_company_id: Option<String>,
    /// The live session, absent when none is active.
    #[serde(default)]
    pub current_session: Option<Session>,
}

/// An abstract store for the application snapshot.
///
/// Decouples the application layer from the storage mechanism.
/// Implementations must round-trip [`AppSnapshot`] exactly.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the persisted snapshot, or the default when none exists.
    async fn load(&self) -> Result<AppSnapshot>;

    /// Persists the snapshot, replacing any previous one.
    async fn save(&self, snapshot: &AppSnapshot) -> Result<()>;

    /// Removes the persisted snapshot entirely.
    async fn clear(&self) -> Result<()>;
}
