use crate::logic::commands::ConditionCommand;
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::messages::CONDITION_USAGE;
use crate::logic::parser_util::{parse_condition_text, parse_index};

/// Parses `INDEX CONDITION_TEXT` into a [`ConditionCommand`].
///
/// Any problem with the index is reported as the generic usage message rather than the
/// index-specific one.
pub fn parse(args: &str) -> ParseResult<ConditionCommand> {
    let format_error = || ParseError::InvalidFormat {
        usage: CONDITION_USAGE,
    };

    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(format_error());
    }

    let (index_part, text) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(format_error)?;

    let index = parse_index(index_part).map_err(|_| format_error())?;
    let condition = parse_condition_text(text)?;

    Ok(ConditionCommand::new(index, condition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::index::Index;
    use crate::model::ConditionNote;

    fn usage_error() -> ParseError {
        ParseError::InvalidFormat {
            usage: CONDITION_USAGE,
        }
    }

    #[test]
    fn parses_index_and_text() {
        let command = parse(" 1 diabetes ").expect("valid command");
        assert_eq!(
            command,
            ConditionCommand::new(
                Index::from_zero_based(0),
                ConditionNote::new("diabetes").unwrap()
            )
        );
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        let command = parse("2 \t  high blood pressure").expect("valid command");
        assert_eq!(command.index(), Index::from_zero_based(1));
        assert_eq!(command.condition().as_str(), "high blood pressure");
    }

    #[test]
    fn empty_arguments_are_a_usage_error() {
        assert_eq!(parse("   "), Err(usage_error()));
    }

    #[test]
    fn missing_text_is_a_usage_error() {
        assert_eq!(parse("1"), Err(usage_error()));
    }

    #[test]
    fn bad_index_collapses_to_usage_error() {
        assert_eq!(parse("0 diabetes"), Err(usage_error()));
        assert_eq!(parse("one diabetes"), Err(usage_error()));
        assert_eq!(parse("-3 diabetes"), Err(usage_error()));
    }

    #[test]
    fn more_than_six_words_is_too_long() {
        let err = parse("1 this condition has way too many words in it").expect_err("8 words");
        assert_eq!(err, ParseError::ConditionTooLong);
    }

    #[test]
    fn exactly_six_words_is_accepted() {
        assert!(parse("1 one two three four five six").is_ok());
    }
}
