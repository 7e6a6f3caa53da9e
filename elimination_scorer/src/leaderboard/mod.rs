//! Leaderboard views derived from the ledger.
//!
//! - [`validate`] reports missing or duplicated ranks and score drift
//! - [`project`] sorts eliminated players by total points and tags the podium
//!
//! Neither function mutates the ledger. A presentation layer is expected to
//! call both after every mutation.

pub mod projector;
pub mod validator;

pub use projector::{Podium, Standing, project};
pub use validator::{Anomaly, validate};
