//! # Elimination Scorer
//!
//! Scoring for knockout tournaments, where a player's score is the order in
//! which they were eliminated.
//!
//! The core is an elimination-order ledger that keeps ranks contiguous while
//! eliminations are recorded out of order, edited after the fact, or undone.
//! Every eliminated player earns points equal to their rank, and the last
//! three players standing earn a podium bonus.
//!
//! ## Core Modules
//!
//! - [`ledger`]: Player records, rank assignment and renumbering
//! - [`leaderboard`]: Anomaly detection and the sorted leaderboard
//! - [`storage`]: JSON snapshot persistence
//! - [`session`]: A ledger with its store, saved after each mutation
//!
//! ## Example
//!
//! ```
//! use elimination_scorer::{TournamentSession, leaderboard::Podium, storage::MemoryStore};
//!
//! let mut session = TournamentSession::open(MemoryStore::new())?;
//! for name in ["Ann", "Ben", "Cat"] {
//!     session.check_in(name)?;
//! }
//! session.start_tournament()?;
//! session.eliminate_next("Ben")?;
//! session.eliminate_next("Ann")?;
//!
//! let board = session.standings();
//! assert_eq!(board[0].name, "Ann");
//! assert_eq!(board[0].podium, Some(Podium::First));
//! assert!(session.anomalies().is_empty());
//! # Ok::<(), elimination_scorer::SessionError>(())
//! ```

/// Elimination-order ledger.
pub mod ledger;
pub use ledger::{EliminationLedger, LedgerError, LedgerResult, PlayerRecord, Rank, Snapshot};

/// Leaderboard validator and projector.
pub mod leaderboard;

pub mod session;
pub use session::{SessionError, SessionResult, TournamentSession};

/// Snapshot persistence.
pub mod storage;
