//! A ledger paired with the store that persists it.

use crate::{
    ledger::{EliminationLedger, LedgerError, LedgerResult, PlayerRecord, Rank},
    leaderboard::{self, Anomaly, Standing},
    storage::{SnapshotStore, StorageError},
};
use log::warn;
use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The ledger rejected the operation; nothing changed
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The operation applied but the snapshot could not be written
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Message suitable for showing to whoever is running the scorer
    pub fn client_message(&self) -> String {
        match self {
            SessionError::Ledger(e) => e.client_message(),
            SessionError::Storage(_) => "Could not save tournament data".to_string(),
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Owns one ledger and its snapshot store.
///
/// The snapshot is loaded once on [`open`](Self::open) and saved after every
/// mutation that succeeds. Rejected operations leave both the ledger and the
/// store untouched.
#[derive(Debug)]
pub struct TournamentSession<S: SnapshotStore> {
    ledger: EliminationLedger,
    store: S,
}

impl<S: SnapshotStore> TournamentSession<S> {
    /// Load the stored snapshot into a new session
    pub fn open(mut store: S) -> SessionResult<Self> {
        let snapshot = store.load()?;
        Ok(Self {
            ledger: EliminationLedger::from_snapshot(snapshot),
            store,
        })
    }

    /// Start a session from an existing ledger without loading
    pub fn with_ledger(ledger: EliminationLedger, store: S) -> Self {
        Self { ledger, store }
    }

    pub fn ledger(&self) -> &EliminationLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current leaderboard
    pub fn standings(&self) -> Vec<Standing> {
        leaderboard::project(&self.ledger)
    }

    /// Current ranking anomalies
    pub fn anomalies(&self) -> Vec<Anomaly> {
        leaderboard::validate(&self.ledger).collect()
    }

    pub fn check_in(&mut self, name: &str) -> SessionResult<()> {
        self.commit("check_in", |ledger| ledger.check_in(name))
    }

    pub fn remove_player(&mut self, name: &str) -> SessionResult<PlayerRecord> {
        self.commit("remove_player", |ledger| ledger.remove_player(name))
    }

    pub fn start_tournament(&mut self) -> SessionResult<()> {
        self.commit("start_tournament", EliminationLedger::start_tournament)
    }

    pub fn eliminate_next(&mut self, name: &str) -> SessionResult<Rank> {
        self.commit("eliminate_next", |ledger| ledger.eliminate_next(name))
    }

    pub fn eliminate_at_rank(&mut self, name: &str, position: Rank) -> SessionResult<()> {
        self.commit("eliminate_at_rank", |ledger| {
            ledger.eliminate_at_rank(name, position)
        })
    }

    pub fn move_rank(&mut self, name: &str, new_position: Rank) -> SessionResult<()> {
        self.commit("move_rank", |ledger| ledger.move_rank(name, new_position))
    }

    pub fn clear_rank(&mut self, name: &str) -> SessionResult<Option<Rank>> {
        self.commit("clear_rank", |ledger| ledger.clear_rank(name))
    }

    /// Drop all players and erase the stored snapshot
    pub fn reset(&mut self) -> SessionResult<()> {
        self.ledger.reset();
        self.store.clear()?;
        Ok(())
    }

    /// Write the current state, e.g. after starting from a fresh ledger
    pub fn save(&mut self) -> SessionResult<()> {
        self.store.save(&self.ledger.snapshot())?;
        Ok(())
    }

    fn commit<T>(
        &mut self,
        operation: &str,
        apply: impl FnOnce(&mut EliminationLedger) -> LedgerResult<T>,
    ) -> SessionResult<T> {
        match apply(&mut self.ledger) {
            Ok(value) => {
                self.store.save(&self.ledger.snapshot())?;
                Ok(value)
            }
            Err(e) => {
                warn!("{} rejected: {}", operation, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session_with(names: &[&str]) -> TournamentSession<MemoryStore> {
        let mut session = TournamentSession::open(MemoryStore::new()).unwrap();
        for name in names {
            session.check_in(name).unwrap();
        }
        session.start_tournament().unwrap();
        session
    }

    #[test]
    fn test_saves_after_each_success() {
        let mut session = session_with(&["A", "B", "C"]);
        assert_eq!(session.store().saves(), 4);

        session.eliminate_next("A").unwrap();
        session.eliminate_at_rank("B", 1).unwrap();
        session.move_rank("B", 2).unwrap();
        session.clear_rank("B").unwrap();
        assert_eq!(session.store().saves(), 8);
    }

    #[test]
    fn test_rejection_does_not_save() {
        let mut session = session_with(&["A", "B"]);
        let saves = session.store().saves();

        let err = session.eliminate_at_rank("A", 7).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Ledger(LedgerError::InvalidRank { .. })
        ));
        assert!(session.check_in("a").is_err());
        assert_eq!(session.store().saves(), saves);
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut session = session_with(&["A", "B", "C"]);
        session.eliminate_next("C").unwrap();
        let json = session.store().json().unwrap().to_string();

        let reopened = TournamentSession::open(MemoryStore::with_json(json)).unwrap();
        assert_eq!(reopened.ledger(), session.ledger());
    }

    #[test]
    fn test_reset_clears_store() {
        let mut session = session_with(&["A"]);
        session.reset().unwrap();
        assert!(session.store().json().is_none());
        assert!(session.ledger().players().is_empty());
    }

    #[test]
    fn test_open_rejects_corrupt_snapshot() {
        let result = TournamentSession::open(MemoryStore::with_json("[1, 2"));
        assert!(matches!(result, Err(SessionError::Storage(_))));
    }

    #[test]
    fn test_views() {
        let mut session = session_with(&["A", "B"]);
        session.eliminate_next("A").unwrap();
        assert_eq!(session.standings().len(), 1);
        assert!(session.anomalies().is_empty());
    }

    #[test]
    fn test_client_message() {
        let err = SessionError::from(LedgerError::NoPlayers);
        assert_eq!(err.client_message(), "Please add players first");
    }
}
