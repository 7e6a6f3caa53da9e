//! Command execution against a tournament session.

use crate::{
    commands::{Command, HELP_TEXT, parse_command},
    logging::log_mutation,
    render,
};
use elimination_scorer::{SessionResult, TournamentSession, storage::SnapshotStore};

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and keep reading commands
    Continue(String),
    /// Stop reading commands
    Quit,
}

/// The scorer's game loop body: parses a line, runs it, and renders the
/// result.
pub struct App<S: SnapshotStore> {
    session: TournamentSession<S>,
    confirm_destructive: bool,
}

impl<S: SnapshotStore> App<S> {
    pub fn new(session: TournamentSession<S>, confirm_destructive: bool) -> Self {
        Self {
            session,
            confirm_destructive,
        }
    }

    pub fn session(&self) -> &TournamentSession<S> {
        &self.session
    }

    /// Handle one typed line.
    ///
    /// `confirm` is asked before destructive commands when confirmation is
    /// enabled; answering `false` cancels the command.
    pub fn handle_line(&mut self, line: &str, confirm: &mut dyn FnMut(&str) -> bool) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue(String::new());
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => return Flow::Continue(format!("{}\n", e)),
        };

        if self.confirm_destructive && command.is_destructive() {
            let question = self.confirmation_question(&command);
            if !confirm(&question) {
                return Flow::Continue("Cancelled\n".to_string());
            }
        }

        self.execute(command)
    }

    /// Run a parsed command
    pub fn execute(&mut self, command: Command) -> Flow {
        let text = match command {
            Command::Quit => return Flow::Quit,
            Command::Help => HELP_TEXT.to_string(),
            Command::Board => render::render_board(&self.session.standings()),
            Command::Check => match render::render_anomalies(&self.session.anomalies()) {
                Some(warning) => warning,
                None => "Elimination order is consistent\n".to_string(),
            },
            Command::Players => render::render_players(self.session.ledger()),
            Command::Status => render::render_status(self.session.ledger()),
            Command::Add(name) => {
                let result = self.session.check_in(&name);
                self.report("add", Some(&name), result, |app, ()| {
                    let ledger = app.session.ledger();
                    if ledger.is_active() {
                        format!(
                            "Checked in {} (field is now {})",
                            app.display_name(&name),
                            ledger.total_players()
                        )
                    } else {
                        format!("Checked in {}", app.display_name(&name))
                    }
                })
            }
            Command::Remove(name) => {
                let result = self.session.remove_player(&name);
                self.report("remove", Some(&name), result, |_, record| {
                    format!("Removed {}", record.name)
                })
            }
            Command::Start => {
                let result = self.session.start_tournament();
                self.report("start", None, result, |app, ()| {
                    format!(
                        "Tournament started with {} players",
                        app.session.ledger().total_players()
                    )
                })
            }
            Command::Out(name) => {
                let result = self.session.eliminate_next(&name);
                self.report("out", Some(&name), result, |app, rank| {
                    format!("{} eliminated at rank {}", app.display_name(&name), rank)
                })
            }
            Command::Insert(name, rank) => {
                let result = self.session.eliminate_at_rank(&name, rank);
                self.report("insert", Some(&name), result, |app, ()| {
                    format!("{} inserted at rank {}", app.display_name(&name), rank)
                })
            }
            Command::Move(name, rank) => {
                let result = self.session.move_rank(&name, rank);
                self.report("move", Some(&name), result, |app, ()| {
                    format!("{} moved to rank {}", app.display_name(&name), rank)
                })
            }
            Command::Clear(name) => {
                let result = self.session.clear_rank(&name);
                self.report("clear", Some(&name), result, |app, rank| match rank {
                    Some(rank) => format!(
                        "Removed score for {} (was rank {})",
                        app.display_name(&name),
                        rank
                    ),
                    None => format!("Removed score for {}", app.display_name(&name)),
                })
            }
            Command::Reset => {
                let result = self.session.reset();
                self.report("reset", None, result, |_, ()| {
                    "All players and scores cleared".to_string()
                })
            }
        };
        Flow::Continue(text)
    }

    fn confirmation_question(&self, command: &Command) -> String {
        match command {
            Command::Clear(name) => format!(
                "Remove score for {}? This will allow them to be eliminated again.",
                self.display_name(name)
            ),
            _ => "This will clear ALL data including players and scores. Are you sure?"
                .to_string(),
        }
    }

    /// Stored spelling of a player's name, falling back to what was typed
    fn display_name(&self, name: &str) -> String {
        self.session
            .ledger()
            .player(name)
            .map_or_else(|| name.trim().to_string(), |p| p.name.clone())
    }

    /// Turn a mutation result into output, appending the refreshed views
    /// while a tournament is running
    fn report<T>(
        &self,
        command: &str,
        player: Option<&str>,
        result: SessionResult<T>,
        message: impl FnOnce(&Self, T) -> String,
    ) -> String {
        match result {
            Ok(value) => {
                log_mutation(command, player, None);
                let mut text = message(self, value);
                text.push('\n');
                if self.session.ledger().is_active() {
                    text.push_str(&render::render_views(self.session.ledger()));
                }
                text
            }
            Err(e) => {
                log_mutation(command, player, Some(&e.to_string()));
                format!("{}\n", e.client_message())
            }
        }
    }
}
