//! Snapshot persistence.
//!
//! The ledger never touches storage itself. A [`SnapshotStore`] is handed the
//! full [`Snapshot`] after each successful mutation and returns it on load.
//!
//! ## Example
//!
//! ```no_run
//! use elimination_scorer::storage::{JsonFileStore, SnapshotStore};
//!
//! let mut store = JsonFileStore::new("tournament.json");
//! let snapshot = store.load()?;
//! println!("{} players on file", snapshot.players.len());
//! # Ok::<(), elimination_scorer::storage::StorageError>(())
//! ```

pub mod errors;
pub mod json_file;
pub mod memory;

pub use errors::{StorageError, StorageResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::ledger::Snapshot;

/// Persistence sink and loader for ledger snapshots
pub trait SnapshotStore {
    /// Load the stored snapshot, or the default snapshot when nothing is stored
    fn load(&mut self) -> StorageResult<Snapshot>;

    /// Replace the stored snapshot
    fn save(&mut self, snapshot: &Snapshot) -> StorageResult<()>;

    /// Forget everything stored
    fn clear(&mut self) -> StorageResult<()>;
}
