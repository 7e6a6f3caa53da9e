//! Plain-text views of the ledger.

use elimination_scorer::{
    EliminationLedger,
    leaderboard::{Anomaly, Podium, Standing},
};
use std::fmt::Write;

/// Leaderboard table, best total first
pub fn render_board(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "No players eliminated yet\n".to_string();
    }

    let width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!(
        "{:>3}  {:<width$}  {:>5}  {:>5}  {:>5}\n",
        "#", "Name", "Elim", "Bonus", "Total"
    );
    for standing in standings {
        let bonus = if standing.bonus_points > 0 {
            standing.bonus_points.to_string()
        } else {
            "-".to_string()
        };
        let marker = match standing.podium {
            Some(Podium::First) => "  *** 1st",
            Some(Podium::Second) => "  **  2nd",
            Some(Podium::Third) => "  *   3rd",
            None => "",
        };
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>5}  {:>5}  {:>5}{}",
            standing.place,
            standing.name,
            standing.elimination_points,
            bonus,
            standing.total_points,
            marker
        );
    }
    out
}

/// Warning block for ranking anomalies, or `None` when the order is clean
pub fn render_anomalies(anomalies: &[Anomaly]) -> Option<String> {
    if anomalies.is_empty() {
        return None;
    }

    let mut out = String::from("Elimination order issues detected:\n");
    for anomaly in anomalies {
        let _ = writeln!(out, "  - {}", anomaly);
    }
    out.push_str("Please fix these issues by editing player positions.\n");
    Some(out)
}

/// One-line tournament summary
pub fn render_status(ledger: &EliminationLedger) -> String {
    if !ledger.is_active() {
        return format!(
            "No tournament running ({} players checked in)\n",
            ledger.players().len()
        );
    }
    format!(
        "Players: {} | Next elimination: {} | Remaining: {}\n",
        ledger.total_players(),
        ledger.next_elimination_rank(),
        ledger.players_remaining()
    )
}

/// Roster in alphabetical order, eliminated players marked with their rank
pub fn render_players(ledger: &EliminationLedger) -> String {
    if ledger.players().is_empty() {
        return "No players checked in\n".to_string();
    }

    let mut players: Vec<_> = ledger.players().iter().collect();
    players.sort_by_key(|p| p.name.to_lowercase());

    let mut out = String::new();
    for player in players {
        match player.rank() {
            Some(rank) => {
                let _ = writeln!(out, "  {} (out, rank {})", player.name, rank);
            }
            None => {
                let _ = writeln!(out, "  {}", player.name);
            }
        }
    }
    let _ = writeln!(out, "{} players", ledger.players().len());
    out
}

/// Everything shown after a mutation: status, leaderboard and warnings
pub fn render_views(ledger: &EliminationLedger) -> String {
    let standings = elimination_scorer::leaderboard::project(ledger);
    let anomalies: Vec<_> = elimination_scorer::leaderboard::validate(ledger).collect();

    let mut out = render_status(ledger);
    out.push_str(&render_board(&standings));
    if let Some(warning) = render_anomalies(&anomalies) {
        out.push_str(&warning);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use elimination_scorer::{
        leaderboard::project,
        storage::{MemoryStore, SnapshotStore},
    };

    fn ledger_with(names: &[&str], out: &[&str]) -> EliminationLedger {
        let mut ledger = EliminationLedger::new();
        for name in names {
            ledger.check_in(name).unwrap();
        }
        ledger.start_tournament().unwrap();
        for name in out {
            ledger.eliminate_next(name).unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(render_board(&[]), "No players eliminated yet\n");
    }

    #[test]
    fn test_board_rows() {
        let ledger = ledger_with(&["Ann", "Bob", "Cy", "Dee"], &["Ann", "Bob"]);
        let board = render_board(&project(&ledger));
        let lines: Vec<_> = board.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Bonus"));
        // Bob: rank 2 of 4, two remaining -> 10 bonus
        assert!(lines[1].contains("Bob"));
        assert!(lines[1].contains("12"));
        assert!(lines[1].ends_with("1st"));
        // Ann has no bonus
        assert!(lines[2].contains("Ann"));
        assert!(lines[2].contains('-'));
        assert!(lines[2].ends_with("2nd"));
    }

    #[test]
    fn test_anomaly_block() {
        assert_eq!(render_anomalies(&[]), None);
        let text = render_anomalies(&[Anomaly::MissingRank(2)]).unwrap();
        assert!(text.contains("  - missing rank 2"));
    }

    #[test]
    fn test_status() {
        let mut ledger = EliminationLedger::new();
        ledger.check_in("Ann").unwrap();
        assert_eq!(
            render_status(&ledger),
            "No tournament running (1 players checked in)\n"
        );

        let ledger = ledger_with(&["Ann", "Bob", "Cy"], &["Cy"]);
        assert_eq!(
            render_status(&ledger),
            "Players: 3 | Next elimination: 2 | Remaining: 2\n"
        );
    }

    #[test]
    fn test_players_sorted_alphabetically() {
        let ledger = ledger_with(&["zed", "Amy", "bob"], &["bob"]);
        assert_eq!(
            render_players(&ledger),
            "  Amy\n  bob (out, rank 1)\n  zed\n3 players\n"
        );
    }

    #[test]
    fn test_board_with_huge_stored_points() {
        let mut store = MemoryStore::with_json(
            r#"{"players": [{"name": "Ann", "eliminated": true, "eliminationRank": 2,
                "eliminationPoints": 4294967295, "bonusPoints": 20}],
                "totalPlayers": 2, "nextEliminationRank": 3}"#,
        );
        let ledger = EliminationLedger::from_snapshot(store.load().unwrap());

        let text = render_views(&ledger);
        assert!(text.contains("4294967295"));
        assert!(text.contains("Ann has 4294967295+20 points, expected 2+20"));
    }

    #[test]
    fn test_views_include_warnings() {
        let mut ledger = ledger_with(&["Ann", "Bob", "Cy"], &["Ann"]);
        ledger.eliminate_at_rank("Bob", 3).unwrap();
        let text = render_views(&ledger);
        assert!(text.contains("missing rank 2"));
    }
}
