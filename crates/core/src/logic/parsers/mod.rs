//! Command parsers, one per command word.
//!
//! [`parse_command`] splits off the command word and routes the remaining argument string to
//! the matching parser. Parsers build a [`Command`] or fail; they never touch the record book.

pub mod condition;
pub mod find;
pub mod tag;

use super::commands::Command;
use super::error::{ParseError, ParseResult};
use super::messages::HELP_USAGE;
use crate::constants::{
    CONDITION_COMMAND_WORD, EXIT_COMMAND_WORD, FIND_COMMAND_WORD, HELP_COMMAND_WORD,
    LIST_COMMAND_WORD, TAG_COMMAND_WORD,
};

/// Parses one line of user input into a command.
///
/// The first whitespace-delimited token is the command word and is matched exactly. `list`,
/// `help` and `exit` ignore any arguments.
pub fn parse_command(line: &str) -> ParseResult<Command> {
    let trimmed = line.trim();
    let (command_word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    if command_word.is_empty() {
        return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
    }

    tracing::debug!(command_word, "dispatching command line");

    match command_word {
        CONDITION_COMMAND_WORD => condition::parse(args).map(Command::Condition),
        TAG_COMMAND_WORD => tag::parse(args).map(Command::Tag),
        FIND_COMMAND_WORD => find::parse(args).map(Command::Find),
        LIST_COMMAND_WORD => Ok(Command::List),
        HELP_COMMAND_WORD => Ok(Command::Help),
        EXIT_COMMAND_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::messages::MESSAGE_UNKNOWN_COMMAND;

    #[test]
    fn routes_each_command_word() {
        assert!(matches!(
            parse_command("condition 1 diabetes"),
            Ok(Command::Condition(_))
        ));
        assert!(matches!(parse_command("tag 1 a/dust"), Ok(Command::Tag(_))));
        assert!(matches!(parse_command("find alex"), Ok(Command::Find(_))));
        assert!(matches!(parse_command("list"), Ok(Command::List)));
        assert!(matches!(parse_command("help me"), Ok(Command::Help)));
        assert!(matches!(parse_command("  exit  "), Ok(Command::Exit)));
    }

    #[test]
    fn empty_line_is_a_usage_error() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat { usage: HELP_USAGE })
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = parse_command("tags 1 a/dust").expect_err("unknown word");
        assert_eq!(err, ParseError::UnknownCommand("tags".into()));
        assert_eq!(err.to_string(), MESSAGE_UNKNOWN_COMMAND);
    }

    #[test]
    fn command_word_is_case_sensitive() {
        assert!(matches!(
            parse_command("Condition 1 diabetes"),
            Err(ParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn parser_failures_propagate() {
        assert_eq!(
            parse_command("tag 2 td/peanuts a/pollen"),
            Err(ParseError::AddAndDeleteTags)
        );
    }
}
