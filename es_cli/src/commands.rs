use elimination_scorer::Rank;
use std::fmt;

/// A command typed at the scorer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check a player in (joins mid-tournament when one is running)
    Add(String),
    /// Remove a player who has not been eliminated
    Remove(String),
    /// Start the tournament with everyone checked in
    Start,
    /// Eliminate a player at the next rank
    Out(String),
    /// Record a missed elimination at a specific rank
    Insert(String, Rank),
    /// Change an eliminated player's rank
    Move(String, Rank),
    /// Remove an eliminated player's score
    Clear(String),
    /// Show the leaderboard
    Board,
    /// Show ranking problems
    Check,
    /// List checked-in players
    Players,
    /// Show field size, next rank and players remaining
    Status,
    /// Delete all players and scores
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Whether the command should be confirmed before running
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::Clear(_) | Command::Reset)
    }
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Rank is not a positive whole number.
    InvalidRank(String),
    /// Command needs a player name.
    MissingName(&'static str),
    /// Command needs a player name and a rank.
    MissingRank(&'static str),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRank(value) => write!(
                f,
                "Invalid rank '{}'. Must be a positive whole number (e.g., 'insert alice 3')",
                value
            ),
            Self::MissingName(cmd) => {
                write!(f, "'{}' requires a player name (e.g., '{} alice')", cmd, cmd)
            }
            Self::MissingRank(cmd) => write!(
                f,
                "'{}' requires a player name and a rank (e.g., '{} alice 3')",
                cmd, cmd
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a [`Command`].
///
/// Player names may contain spaces. For commands taking a rank, the rank is
/// the last word.
///
/// # Examples
///
/// ```
/// use es_cli::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("start"), Ok(Command::Start));
/// assert_eq!(parse_command("out Mary Jane"), Ok(Command::Out("Mary Jane".to_string())));
/// assert_eq!(parse_command("insert bob 2"), Ok(Command::Insert("bob".to_string(), 2)));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "start" => return Ok(Command::Start),
        "board" => return Ok(Command::Board),
        "check" => return Ok(Command::Check),
        "players" => return Ok(Command::Players),
        "status" => return Ok(Command::Status),
        "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "add" => parse_name("add", rest).map(Command::Add),
        "remove" => parse_name("remove", rest).map(Command::Remove),
        "out" => parse_name("out", rest).map(Command::Out),
        "clear" => parse_name("clear", rest).map(Command::Clear),
        "insert" => parse_name_and_rank("insert", rest).map(|(n, r)| Command::Insert(n, r)),
        "move" => parse_name_and_rank("move", rest).map(|(n, r)| Command::Move(n, r)),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

fn parse_name(keyword: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingName(keyword));
    }
    Ok(rest.to_string())
}

/// Parse "NAME RANK", where NAME may contain spaces
fn parse_name_and_rank(keyword: &'static str, rest: &str) -> Result<(String, Rank), ParseError> {
    let Some((name, rank)) = rest.rsplit_once(char::is_whitespace) else {
        return Err(ParseError::MissingRank(keyword));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MissingRank(keyword));
    }

    let rank = rank
        .parse::<Rank>()
        .ok()
        .filter(|r| *r > 0)
        .ok_or_else(|| ParseError::InvalidRank(rank.to_string()))?;
    Ok((name.to_string(), rank))
}

pub const HELP_TEXT: &str = "\
Commands:
  add NAME            Check in a player
  remove NAME         Remove a player who has not been eliminated
  start               Start the tournament with everyone checked in
  out NAME            Eliminate a player at the next rank
  insert NAME RANK    Record a missed elimination at RANK
  move NAME RANK      Change an eliminated player's rank
  clear NAME          Remove an eliminated player's score
  board               Show the leaderboard
  check               Show elimination order problems
  players             List checked-in players
  status              Show field size and next rank
  reset               Delete all players and scores
  help                Show this help
  quit                Exit
";

#[cfg(test)]
mod tests {
    use super::*;

    // === Single-word command tests ===

    #[test]
    fn test_parse_single_words() {
        assert_eq!(parse_command("start"), Ok(Command::Start));
        assert_eq!(parse_command("board"), Ok(Command::Board));
        assert_eq!(parse_command("check"), Ok(Command::Check));
        assert_eq!(parse_command("players"), Ok(Command::Players));
        assert_eq!(parse_command("status"), Ok(Command::Status));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        assert_eq!(parse_command("  board  "), Ok(Command::Board));
    }

    // === Name commands ===

    #[test]
    fn test_parse_add_keeps_inner_spaces() {
        assert_eq!(
            parse_command("add  Mary Jane "),
            Ok(Command::Add("Mary Jane".to_string()))
        );
    }

    #[test]
    fn test_parse_name_commands() {
        assert_eq!(
            parse_command("remove bob"),
            Ok(Command::Remove("bob".to_string()))
        );
        assert_eq!(parse_command("out bob"), Ok(Command::Out("bob".to_string())));
        assert_eq!(
            parse_command("clear bob"),
            Ok(Command::Clear("bob".to_string()))
        );
    }

    #[test]
    fn test_parse_name_missing() {
        assert_eq!(parse_command("out"), Err(ParseError::MissingName("out")));
        assert_eq!(parse_command("add   "), Err(ParseError::MissingName("add")));
    }

    // === Rank commands ===

    #[test]
    fn test_parse_insert_and_move() {
        assert_eq!(
            parse_command("insert Mary Jane 4"),
            Ok(Command::Insert("Mary Jane".to_string(), 4))
        );
        assert_eq!(
            parse_command("move bob 1"),
            Ok(Command::Move("bob".to_string(), 1))
        );
    }

    #[test]
    fn test_parse_rank_missing() {
        assert_eq!(
            parse_command("insert bob"),
            Err(ParseError::MissingRank("insert"))
        );
        assert_eq!(parse_command("move"), Err(ParseError::MissingRank("move")));
    }

    #[test]
    fn test_parse_rank_not_a_positive_integer() {
        for input in ["move bob x", "move bob 0", "move bob -2", "move bob 2.5"] {
            assert!(
                matches!(parse_command(input), Err(ParseError::InvalidRank(_))),
                "{input}"
            );
        }
    }

    // === Error cases ===

    #[test]
    fn test_parse_unrecognized_command() {
        let result = parse_command("dance");
        assert!(matches!(result, Err(ParseError::UnrecognizedCommand(_))));
        assert!(matches!(
            parse_command(""),
            Err(ParseError::UnrecognizedCommand(_))
        ));
    }

    #[test]
    fn test_destructive_commands() {
        assert!(Command::Reset.is_destructive());
        assert!(Command::Clear("a".to_string()).is_destructive());
        assert!(!Command::Out("a".to_string()).is_destructive());
    }

    // === Error message tests ===

    #[test]
    fn test_error_message_invalid_rank() {
        let msg = ParseError::InvalidRank("abc".to_string()).to_string();
        assert!(msg.contains("Invalid rank"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_error_message_unrecognized_command() {
        let msg = ParseError::UnrecognizedCommand("xyz".to_string()).to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("help"));
    }
}
