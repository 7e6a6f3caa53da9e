//! Player records and the serialized ledger snapshot.

use serde::{Deserialize, Serialize};

/// 1-based elimination order. Rank 1 is the first player out.
pub type Rank = u32;

/// Points awarded for elimination position and podium bonus.
pub type Points = u32;

/// Bonus for the last player standing.
pub const CHAMPION_BONUS: Points = 20;
/// Bonus for the runner-up.
pub const RUNNER_UP_BONUS: Points = 15;
/// Bonus for third place.
pub const THIRD_PLACE_BONUS: Points = 10;

/// Podium bonus for a player holding `rank` in a field of `total_players`.
///
/// The tier depends only on how many players remained after this one was
/// eliminated, so it must be recomputed whenever either argument changes:
///
/// - 0 remaining: [`CHAMPION_BONUS`]
/// - 1 remaining: [`RUNNER_UP_BONUS`]
/// - 2 remaining: [`THIRD_PLACE_BONUS`]
/// - otherwise 0
///
/// A rank beyond `total_players` earns nothing.
///
/// ```
/// use elimination_scorer::ledger::bonus_points;
///
/// assert_eq!(bonus_points(5, 5), 20);
/// assert_eq!(bonus_points(4, 5), 15);
/// assert_eq!(bonus_points(3, 5), 10);
/// assert_eq!(bonus_points(2, 5), 0);
/// ```
pub fn bonus_points(rank: Rank, total_players: u32) -> Points {
    match total_players.checked_sub(rank) {
        Some(0) => CHAMPION_BONUS,
        Some(1) => RUNNER_UP_BONUS,
        Some(2) => THIRD_PLACE_BONUS,
        _ => 0,
    }
}

/// A checked-in player and their elimination score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Display name, unique ignoring case
    pub name: String,
    /// Whether the player has been knocked out
    #[serde(default)]
    pub eliminated: bool,
    /// Elimination order (None while still in the tournament)
    #[serde(default, alias = "eliminationOrder")]
    pub elimination_rank: Option<Rank>,
    /// Always equal to the rank once eliminated
    #[serde(default)]
    pub elimination_points: Points,
    /// Podium bonus derived from rank and field size
    #[serde(default)]
    pub bonus_points: Points,
}

impl PlayerRecord {
    /// Create a record for a player who has just checked in
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eliminated: false,
            elimination_rank: None,
            elimination_points: 0,
            bonus_points: 0,
        }
    }

    /// Elimination points plus bonus
    pub fn total_points(&self) -> Points {
        self.elimination_points.saturating_add(self.bonus_points)
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Rank held by this player, if eliminated.
    pub fn rank(&self) -> Option<Rank> {
        if self.eliminated {
            self.elimination_rank
        } else {
            None
        }
    }

    pub(crate) fn assign_rank(&mut self, rank: Rank, total_players: u32) {
        self.eliminated = true;
        self.elimination_rank = Some(rank);
        self.elimination_points = rank;
        self.bonus_points = bonus_points(rank, total_players);
    }

    pub(crate) fn clear_elimination(&mut self) {
        self.eliminated = false;
        self.elimination_rank = None;
        self.elimination_points = 0;
        self.bonus_points = 0;
    }
}

fn first_rank() -> Rank {
    1
}

/// Serializable ledger state.
///
/// This is the only persisted format. Absent fields load as an empty roster,
/// no active tournament and a next rank of 1; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub total_players: u32,
    #[serde(default = "first_rank", alias = "nextEliminationOrder")]
    pub next_elimination_rank: Rank,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            total_players: 0,
            next_elimination_rank: first_rank(),
        }
    }
}
