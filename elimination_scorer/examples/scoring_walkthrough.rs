//! Scoring Walkthrough Example
//!
//! Runs a five-player tournament where one elimination is recorded late and
//! another is corrected, printing the leaderboard after each step.

use elimination_scorer::{
    EliminationLedger,
    leaderboard::{project, validate},
};

fn print_board(ledger: &EliminationLedger) {
    for standing in project(ledger) {
        println!(
            "  {:>2}. {:<6} {:>2} + {:>2} = {:>2} {}",
            standing.place,
            standing.name,
            standing.elimination_points,
            standing.bonus_points,
            standing.total_points,
            standing.podium.map(|p| p.to_string()).unwrap_or_default()
        );
    }
    for anomaly in validate(ledger) {
        println!("  warning: {}", anomaly);
    }
    println!();
}

fn main() {
    println!("=== Elimination Scoring Walkthrough ===\n");

    let mut ledger = EliminationLedger::new();
    for name in ["Ann", "Ben", "Cat", "Dan", "Eve"] {
        ledger.check_in(name).expect("unique names");
    }
    ledger.start_tournament().expect("players checked in");

    println!("Step 1: Ann, Ben and Cat are knocked out in order");
    for name in ["Ann", "Ben", "Cat"] {
        ledger.eliminate_next(name).expect("active player");
    }
    print_board(&ledger);

    println!("Step 2: Dan was actually knocked out second");
    ledger.eliminate_at_rank("Dan", 2).expect("valid rank");
    print_board(&ledger);

    println!("Step 3: Ben and Dan were swapped");
    ledger.move_rank("Ben", 2).expect("eliminated player");
    print_board(&ledger);

    println!("Step 4: a latecomer joins, shifting the bonus tiers");
    ledger.check_in("Fay").expect("unique name");
    print_board(&ledger);
}
