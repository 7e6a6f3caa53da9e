//! Detection of ranking anomalies.

use crate::ledger::{EliminationLedger, PlayerRecord, Points, Rank, bonus_points};
use std::{collections::BTreeMap, fmt};

/// A problem found in the ledger's elimination order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// No eliminated player holds this rank
    MissingRank(Rank),
    /// Several eliminated players share this rank
    DuplicateRank { rank: Rank, holders: Vec<String> },
    /// A player holds a rank outside `1..=max`, where `max` is the number of
    /// eliminated players
    OutOfRange { name: String, rank: Rank, max: Rank },
    /// Stored points disagree with the player's rank
    ScoreMismatch {
        name: String,
        stored: (Points, Points),
        expected: (Points, Points),
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::MissingRank(rank) => write!(f, "missing rank {rank}"),
            Anomaly::DuplicateRank { rank, holders } => {
                write!(
                    f,
                    "rank {rank} has duplicate holders: [{}]",
                    holders.join(", ")
                )
            }
            Anomaly::OutOfRange { name, rank, max } => {
                write!(f, "{name} holds rank {rank}, outside 1-{max}")
            }
            Anomaly::ScoreMismatch {
                name,
                stored,
                expected,
            } => write!(
                f,
                "{name} has {}+{} points, expected {}+{}",
                stored.0, stored.1, expected.0, expected.1
            ),
        }
    }
}

/// Scan the ledger for ranking anomalies.
///
/// Ranks `1..=E` are checked in order, where `E` is the number of eliminated
/// players. Then come ranks held outside that range, then a score check of
/// each eliminated player. Nothing is corrected; a healthy ledger yields
/// nothing.
pub fn validate(ledger: &EliminationLedger) -> impl Iterator<Item = Anomaly> + '_ {
    let mut holders: BTreeMap<Rank, Vec<&str>> = BTreeMap::new();
    let mut eliminated_count: Rank = 0;
    for player in ledger.eliminated() {
        eliminated_count += 1;
        if let Some(rank) = player.elimination_rank {
            holders.entry(rank).or_default().push(&player.name);
        }
    }

    let rank_anomalies = (1..=eliminated_count).filter_map(move |rank| {
        match holders.get(&rank).map(Vec::as_slice) {
            None | Some([]) => Some(Anomaly::MissingRank(rank)),
            Some([_]) => None,
            Some(names) => Some(Anomaly::DuplicateRank {
                rank,
                holders: names.iter().map(|name| name.to_string()).collect(),
            }),
        }
    });

    let range_anomalies = ledger.eliminated().filter_map(move |player| {
        let rank = player.elimination_rank?;
        (rank == 0 || rank > eliminated_count).then(|| Anomaly::OutOfRange {
            name: player.name.clone(),
            rank,
            max: eliminated_count,
        })
    });

    let total_players = ledger.total_players();
    let score_anomalies = ledger
        .eliminated()
        .filter_map(move |player| score_mismatch(player, total_players));

    rank_anomalies
        .chain(range_anomalies)
        .chain(score_anomalies)
}

fn score_mismatch(player: &PlayerRecord, total_players: u32) -> Option<Anomaly> {
    let rank = player.elimination_rank?;
    let expected = (rank, bonus_points(rank, total_players));
    let stored = (player.elimination_points, player.bonus_points);
    (stored != expected).then(|| Anomaly::ScoreMismatch {
        name: player.name.clone(),
        stored,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Snapshot;

    fn eliminated(name: &str, rank: Rank, total: u32) -> PlayerRecord {
        let mut player = PlayerRecord::new(name);
        player.eliminated = true;
        player.elimination_rank = Some(rank);
        player.elimination_points = rank;
        player.bonus_points = bonus_points(rank, total);
        player
    }

    fn ledger_with(players: Vec<PlayerRecord>, total: u32) -> EliminationLedger {
        EliminationLedger::from_snapshot(Snapshot {
            players,
            total_players: total,
            next_elimination_rank: 1,
        })
    }

    #[test]
    fn test_healthy_ledger_has_no_anomalies() {
        let ledger = ledger_with(
            vec![
                eliminated("A", 1, 4),
                PlayerRecord::new("B"),
                eliminated("C", 2, 4),
            ],
            4,
        );
        assert_eq!(validate(&ledger).count(), 0);
    }

    #[test]
    fn test_empty_ledger_has_no_anomalies() {
        assert_eq!(validate(&EliminationLedger::new()).next(), None);
    }

    #[test]
    fn test_reports_duplicate_and_missing() {
        let ledger = ledger_with(
            vec![
                eliminated("A", 1, 5),
                eliminated("B", 1, 5),
                eliminated("C", 3, 5),
            ],
            5,
        );

        let anomalies: Vec<_> = validate(&ledger).collect();
        assert_eq!(
            anomalies,
            vec![
                Anomaly::DuplicateRank {
                    rank: 1,
                    holders: vec!["A".to_string(), "B".to_string()],
                },
                Anomaly::MissingRank(2),
            ]
        );
        assert_eq!(
            anomalies[0].to_string(),
            "rank 1 has duplicate holders: [A, B]"
        );
        assert_eq!(anomalies[1].to_string(), "missing rank 2");
    }

    #[test]
    fn test_eliminated_without_rank_counts_as_gap() {
        let mut ghost = PlayerRecord::new("Ghost");
        ghost.eliminated = true;
        let ledger = ledger_with(vec![eliminated("A", 1, 3), ghost], 3);

        let anomalies: Vec<_> = validate(&ledger).collect();
        assert_eq!(anomalies, vec![Anomaly::MissingRank(2)]);
    }

    #[test]
    fn test_reports_ranks_outside_range() {
        let mut zero = eliminated("Z", 1, 4);
        zero.elimination_rank = Some(0);
        zero.elimination_points = 0;
        let ledger = ledger_with(vec![zero, eliminated("A", 1, 4), eliminated("B", 4, 4)], 4);

        let anomalies: Vec<_> = validate(&ledger).collect();
        assert_eq!(
            anomalies,
            vec![
                Anomaly::MissingRank(2),
                Anomaly::MissingRank(3),
                Anomaly::OutOfRange {
                    name: "Z".to_string(),
                    rank: 0,
                    max: 3,
                },
                Anomaly::OutOfRange {
                    name: "B".to_string(),
                    rank: 4,
                    max: 3,
                },
            ]
        );
        assert_eq!(anomalies[2].to_string(), "Z holds rank 0, outside 1-3");
    }

    #[test]
    fn test_reports_score_drift() {
        let mut drifted = eliminated("A", 2, 3);
        drifted.bonus_points = 0;
        let ledger = ledger_with(vec![eliminated("B", 1, 3), drifted], 3);

        let anomalies: Vec<_> = validate(&ledger).collect();
        assert_eq!(
            anomalies,
            vec![Anomaly::ScoreMismatch {
                name: "A".to_string(),
                stored: (2, 0),
                expected: (2, 15),
            }]
        );
        assert_eq!(anomalies[0].to_string(), "A has 2+0 points, expected 2+15");
    }
}
