//! Elimination-order ledger.
//!
//! This module tracks which players are out and in what order:
//! - Appending eliminations at the next free rank
//! - Backfilling a missed elimination at an earlier rank
//! - Moving or clearing a recorded rank
//! - Growing or shrinking the field mid-tournament
//!
//! Ranks of eliminated players always form `1..=E`. Elimination points equal
//! the rank, and the podium bonus is recomputed whenever a rank or the field
//! size changes.
//!
//! ## Example
//!
//! ```
//! use elimination_scorer::ledger::EliminationLedger;
//!
//! let mut ledger = EliminationLedger::new();
//! for name in ["Ann", "Ben", "Cat", "Dan", "Eve"] {
//!     ledger.check_in(name).unwrap();
//! }
//! ledger.start_tournament().unwrap();
//!
//! ledger.eliminate_next("Ann").unwrap();
//! ledger.eliminate_next("Ben").unwrap();
//! // Dan actually went out before Ben
//! ledger.eliminate_at_rank("Dan", 2).unwrap();
//!
//! assert_eq!(ledger.player("Ben").unwrap().elimination_rank, Some(3));
//! assert_eq!(ledger.next_elimination_rank(), 4);
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LedgerError, LedgerResult, PlayerStateReason};
pub use manager::EliminationLedger;
pub use models::{
    CHAMPION_BONUS, PlayerRecord, Points, RUNNER_UP_BONUS, Rank, Snapshot, THIRD_PLACE_BONUS,
    bonus_points,
};
