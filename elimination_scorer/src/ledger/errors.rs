//! Ledger error types.

use super::models::Rank;
use std::fmt;
use thiserror::Error;

/// Why a player was in the wrong state for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStateReason {
    /// No player by that name
    NotFound,
    /// Operation needs an active player
    AlreadyEliminated,
    /// Operation needs an eliminated player
    NotEliminated,
}

impl fmt::Display for PlayerStateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStateReason::NotFound => write!(f, "not found"),
            PlayerStateReason::AlreadyEliminated => write!(f, "already eliminated"),
            PlayerStateReason::NotEliminated => write!(f, "not eliminated"),
        }
    }
}

/// Ledger errors.
///
/// Every error is returned before any state is touched, so the ledger is
/// unchanged after a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Position outside `1..=max`
    #[error("Invalid rank {rank}: must be between 1 and {max}")]
    InvalidRank { rank: Rank, max: u32 },

    /// Missing player, or eliminated/active mismatch
    #[error("Player {name} is {reason}")]
    InvalidPlayerState {
        name: String,
        reason: PlayerStateReason,
    },

    /// Name collides with an existing player (ignoring case)
    #[error("Player already exists: {0}")]
    DuplicatePlayer(String),

    /// Blank player name
    #[error("Player name must not be empty")]
    EmptyName,

    /// Tried to start with an empty roster
    #[error("Cannot start a tournament without players")]
    NoPlayers,

    /// Elimination requested with no tournament running
    #[error("No tournament is active")]
    NotStarted,
}

impl LedgerError {
    pub(crate) fn not_found(name: &str) -> Self {
        LedgerError::InvalidPlayerState {
            name: name.trim().to_string(),
            reason: PlayerStateReason::NotFound,
        }
    }

    /// Message suitable for showing to whoever is running the scorer
    pub fn client_message(&self) -> String {
        match self {
            LedgerError::InvalidRank { max, .. } => {
                format!("Please enter a valid elimination order (1-{max})")
            }
            LedgerError::InvalidPlayerState {
                name,
                reason: PlayerStateReason::AlreadyEliminated,
            } => format!("{name} has already been eliminated. Edit their rank instead."),
            LedgerError::InvalidPlayerState {
                name,
                reason: PlayerStateReason::NotEliminated,
            } => format!("{name} has not been eliminated yet"),
            LedgerError::NoPlayers => "Please add players first".to_string(),
            LedgerError::NotStarted => "Please start a tournament first".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
