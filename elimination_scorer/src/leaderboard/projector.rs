//! Sorted, scored view of the eliminated players.

use crate::ledger::{EliminationLedger, Points, Rank};
use std::fmt;

/// Top-three tag for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Podium {
    First,
    Second,
    Third,
}

impl Podium {
    /// Podium tag for a 1-based leaderboard place
    pub fn for_place(place: usize) -> Option<Self> {
        match place {
            1 => Some(Podium::First),
            2 => Some(Podium::Second),
            3 => Some(Podium::Third),
            _ => None,
        }
    }
}

impl fmt::Display for Podium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Podium::First => write!(f, "1st"),
            Podium::Second => write!(f, "2nd"),
            Podium::Third => write!(f, "3rd"),
        }
    }
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// 1-based leaderboard position
    pub place: usize,
    pub name: String,
    pub elimination_rank: Option<Rank>,
    pub elimination_points: Points,
    pub bonus_points: Points,
    pub total_points: Points,
    pub podium: Option<Podium>,
}

/// Build the leaderboard.
///
/// Eliminated players are ordered by total points, highest first. The sort is
/// stable: players on equal totals keep their check-in order.
pub fn project(ledger: &EliminationLedger) -> Vec<Standing> {
    let mut eliminated: Vec<_> = ledger.eliminated().collect();
    eliminated.sort_by(|a, b| b.total_points().cmp(&a.total_points()));

    eliminated
        .into_iter()
        .enumerate()
        .map(|(idx, player)| Standing {
            place: idx + 1,
            name: player.name.clone(),
            elimination_rank: player.elimination_rank,
            elimination_points: player.elimination_points,
            bonus_points: player.bonus_points,
            total_points: player.total_points(),
            podium: Podium::for_place(idx + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{PlayerRecord, Snapshot};

    #[test]
    fn test_project_orders_by_total() {
        let mut ledger = EliminationLedger::new();
        for name in ["A", "B", "C", "D", "E"] {
            ledger.check_in(name).unwrap();
        }
        ledger.start_tournament().unwrap();
        for name in ["A", "B", "C", "D"] {
            ledger.eliminate_next(name).unwrap();
        }

        let board = project(&ledger);
        let names: Vec<_> = board.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["D", "C", "B", "A"]);
        assert_eq!(board[0].total_points, 19);
        assert_eq!(board[0].podium, Some(Podium::First));
        assert_eq!(board[1].podium, Some(Podium::Second));
        assert_eq!(board[2].podium, Some(Podium::Third));
        assert_eq!(board[3].podium, None);
        assert_eq!(board[3].place, 4);
    }

    #[test]
    fn test_ties_keep_check_in_order() {
        let tied = |name: &str| {
            let mut player = PlayerRecord::new(name);
            player.eliminated = true;
            player.elimination_rank = Some(1);
            player.elimination_points = 1;
            player
        };
        let ledger = EliminationLedger::from_snapshot(Snapshot {
            players: vec![tied("Zoe"), PlayerRecord::new("Max"), tied("Abe")],
            total_players: 9,
            next_elimination_rank: 2,
        });

        let names: Vec<_> = project(&ledger).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Zoe", "Abe"]);
    }

    #[test]
    fn test_project_skips_active_players() {
        let mut ledger = EliminationLedger::new();
        ledger.check_in("A").unwrap();
        ledger.start_tournament().unwrap();
        assert!(project(&ledger).is_empty());
    }

    #[test]
    fn test_podium_display() {
        assert_eq!(Podium::First.to_string(), "1st");
        assert_eq!(Podium::for_place(4), None);
    }
}
