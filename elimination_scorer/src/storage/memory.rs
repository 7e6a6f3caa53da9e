//! In-memory snapshot store.

use super::{SnapshotStore, StorageResult};
use crate::ledger::Snapshot;

/// Keeps the serialized snapshot in memory.
///
/// The snapshot still goes through JSON, so this store behaves like
/// [`JsonFileStore`](super::JsonFileStore) without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw JSON, as if written by an earlier run
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            saves: 0,
        }
    }

    /// Last saved JSON, if any
    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&mut self) -> StorageResult<Snapshot> {
        match &self.json {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Snapshot::default()),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> StorageResult<()> {
        self.json = Some(serde_json::to_string(snapshot)?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.json = None;
        Ok(())
    }
}
