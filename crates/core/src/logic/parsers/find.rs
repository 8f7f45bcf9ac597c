use crate::logic::commands::FindCommand;
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::messages::FIND_USAGE;

pub fn parse(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
    }
    Ok(FindCommand::new(keywords))
}
