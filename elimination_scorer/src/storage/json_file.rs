//! Snapshot persistence in a single JSON file.

use super::{SnapshotStore, StorageResult};
use crate::ledger::Snapshot;
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Stores the snapshot as pretty-printed JSON at a fixed path.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&mut self) -> StorageResult<Snapshot> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                debug!("Loaded snapshot from {}", self.path.display());
                Ok(serde_json::from_str(&json)?)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ledger::PlayerRecord, storage::StorageError};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_default() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("none.json"));
        assert_eq!(store.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("scores.json"));
        let snapshot = Snapshot {
            players: vec![PlayerRecord::new("Ann")],
            total_players: 1,
            next_elimination_rank: 1,
        };

        store.save(&snapshot).unwrap();
        assert!(!store.temp_path().exists());
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn test_clear_removes_file() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp.path().join("scores.json"));
        store.save(&Snapshot::default()).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scores.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = JsonFileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(StorageError::Serialization(_))
        ));
    }
}
