//! Field parsers shared by the command parsers.
//!
//! Each function validates one raw token and converts it to a domain value. None of them look
//! at the record book.

use super::error::{ParseError, ParseResult};
use super::index::Index;
use super::messages::CONDITION_USAGE;
use crate::model::{ConditionNote, Tag};
use medbook_types::TextError;
use std::collections::BTreeSet;

/// Parses a 1-based positive integer into an [`Index`].
///
/// Leading and trailing whitespace is ignored. Signs, zero and anything non-numeric are
/// rejected with [`ParseError::InvalidIndex`].
pub fn parse_index(one_based: &str) -> ParseResult<Index> {
    let trimmed = one_based.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }

    let value: usize = trimmed.parse().map_err(|_| ParseError::InvalidIndex)?;
    Index::from_one_based(value).ok_or(ParseError::InvalidIndex)
}

pub fn parse_tag(label: &str) -> ParseResult<Tag> {
    Tag::new(label).map_err(|_| ParseError::BlankTag)
}

/// Parses every label, merging labels that normalise to the same tag.
pub fn parse_tags<S: AsRef<str>>(labels: &[S]) -> ParseResult<BTreeSet<Tag>> {
    labels.iter().map(|label| parse_tag(label.as_ref())).collect()
}

/// Parses free text into a condition note.
///
/// Blank text is a format error for the `condition` command; too many words is reported with
/// [`ParseError::ConditionTooLong`].
pub fn parse_condition_text(text: &str) -> ParseResult<ConditionNote> {
    ConditionNote::new(text).map_err(|e| match e {
        TextError::Empty => ParseError::InvalidFormat {
            usage: CONDITION_USAGE,
        },
        TextError::TooManyWords { .. } => ParseError::ConditionTooLong,
    })
}
