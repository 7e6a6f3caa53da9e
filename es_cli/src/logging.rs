//! Structured logging configuration.
//!
//! Log output goes to stderr so it never mixes with the leaderboard on
//! stdout. Records emitted by `elimination_scorer` through the `log` facade
//! are forwarded into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging
///
/// Levels are configurable via the RUST_LOG env var and default to `warn`,
/// which shows rejected ledger operations only.
///
/// # Example
///
/// ```no_run
/// use es_cli::logging;
///
/// logging::init();
/// tracing::info!("Scorer starting");
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

/// Log the outcome of a scorer command
///
/// # Arguments
///
/// * `command` - Command name
/// * `player` - Player the command targeted, if any
/// * `error` - Rejection message when the command failed
///
/// # Example
///
/// ```
/// use es_cli::logging::log_mutation;
///
/// log_mutation("out", Some("alice"), None);
/// log_mutation("insert", Some("bob"), Some("Invalid rank 9: must be between 1 and 5"));
/// ```
pub fn log_mutation(command: &str, player: Option<&str>, error: Option<&str>) {
    match error {
        Some(error) => tracing::warn!(
            command = command,
            player = player,
            error = error,
            "Command rejected"
        ),
        None => tracing::info!(command = command, player = player, "Command applied"),
    }
}
