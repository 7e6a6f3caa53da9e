//! A terminal scorer for elimination tournaments.
//!
//! Players are checked in, the tournament is started, and eliminations are
//! recorded one command at a time. The tournament is saved to a JSON file
//! after every change so the scorer can be restarted at any point.

use anyhow::{Context, Result};
use elimination_scorer::{EliminationLedger, TournamentSession, storage::JsonFileStore};
use es_cli::{
    app::{App, Flow},
    config::CliConfig,
    logging,
};
use pico_args::Arguments;
use std::{
    io::{self, Write},
    path::PathBuf,
};

const HELP: &str = "\
Score an elimination tournament

USAGE:
  es_cli [OPTIONS] [COMMAND...]

With a COMMAND, runs it once and exits. Without one, reads commands from
stdin. Type 'help' at the prompt for the command list.

OPTIONS:
  --data       PATH        Tournament file  [default: env SCORER_DATA_FILE or tournament.json]

FLAGS:
  -y, --yes                Do not ask before clearing scores or resetting
  -h, --help               Print help information

ENVIRONMENT:
  SCORER_DATA_FILE         Tournament file
  SCORER_CONFIRM           Ask before destructive commands (true/false)
  SCORER_PROMPT            Interactive prompt
  RUST_LOG                 Log filter [default: warn]
";

struct Args {
    data_file: Option<PathBuf>,
    assume_yes: bool,
    command: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let data_file = pargs
        .opt_value_from_str::<_, PathBuf>("--data")
        .context("Invalid --data value")?;
    let assume_yes = pargs.contains(["-y", "--yes"]);
    let words: Vec<String> = pargs
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let args = Args {
        data_file,
        assume_yes,
        command: (!words.is_empty()).then(|| words.join(" ")),
    };

    logging::init();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_env(args.data_file, args.assume_yes)?;
    tracing::info!(data_file = %config.data_file.display(), "Opening tournament");

    let store = JsonFileStore::new(config.data_file.clone());
    let session = match TournamentSession::open(store) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(
                data_file = %config.data_file.display(),
                "Failed to load tournament, starting empty: {}",
                e
            );
            println!("Could not read saved tournament data, starting fresh");
            TournamentSession::with_ledger(
                EliminationLedger::new(),
                JsonFileStore::new(config.data_file.clone()),
            )
        }
    };
    let mut app = App::new(session, config.confirm_destructive);

    if let Some(command) = args.command {
        if let Flow::Continue(text) = app.handle_line(&command, &mut ask) {
            print!("{text}");
        }
        return Ok(());
    }

    // stdin is not held locked between lines since `ask` reads from it too
    let mut line = String::new();
    loop {
        print!("{}", config.prompt);
        io::stdout().flush()?;

        line.clear();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        match app.handle_line(&line, &mut ask) {
            Flow::Continue(text) => print!("{text}"),
            Flow::Quit => break,
        }
    }

    Ok(())
}

/// Ask a yes/no question on stdin; anything but "y" or "yes" is a no
fn ask(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
