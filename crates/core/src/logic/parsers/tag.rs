use crate::logic::commands::{TagChange, TagCommand};
use crate::logic::error::{ParseError, ParseResult};
use crate::logic::messages::TAG_USAGE;
use crate::logic::parser_util::{parse_index, parse_tag, parse_tags};
use crate::logic::syntax::{
    Prefix, PREFIX_ALLERGY, PREFIX_CONDITION, PREFIX_INSURANCE, PREFIX_TAG_DELETE,
    PREFIX_TAG_EDIT,
};
use crate::logic::tokenizer::{tokenize, ArgumentMultimap};
use crate::model::Tag;

const TAG_PREFIXES: [Prefix; 5] = [
    PREFIX_ALLERGY,
    PREFIX_CONDITION,
    PREFIX_INSURANCE,
    PREFIX_TAG_DELETE,
    PREFIX_TAG_EDIT,
];

/// Parses `INDEX [a/..]... [c/..]... [i/..]... [td/..]... [te/OLD=NEW]` into a [`TagCommand`].
///
/// Adding, deleting and editing are mutually exclusive. The exclusion is decided from which
/// prefixes appear, before any tag value is validated, and is checked in a fixed order:
/// add with delete, then delete with edit, then edit with add.
pub fn parse(args: &str) -> ParseResult<TagCommand> {
    let map = tokenize(args, &TAG_PREFIXES);

    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: TAG_USAGE });
    }

    let index = parse_index(map.preamble())?;

    let adding = [PREFIX_ALLERGY, PREFIX_CONDITION, PREFIX_INSURANCE]
        .into_iter()
        .any(|prefix| map.is_present(prefix));
    let deleting = map.is_present(PREFIX_TAG_DELETE);
    let editing = map.is_present(PREFIX_TAG_EDIT);

    if deleting && adding {
        return Err(ParseError::AddAndDeleteTags);
    }
    if deleting && editing {
        return Err(ParseError::DeleteAndEditTags);
    }
    if editing && adding {
        return Err(ParseError::EditAndAddTags);
    }

    let change = if deleting {
        TagChange::Delete(parse_tags(map.all_values(PREFIX_TAG_DELETE))?)
    } else if let Some(edit) = map.value(PREFIX_TAG_EDIT) {
        let (old, new) = parse_tag_edit(edit)?;
        TagChange::Edit { old, new }
    } else if adding {
        parse_additions(&map)?
    } else {
        TagChange::Unchanged
    };

    tracing::debug!(index = index.one_based(), ?change, "parsed tag command");
    Ok(TagCommand::new(index, change))
}

fn parse_additions(map: &ArgumentMultimap) -> ParseResult<TagChange> {
    Ok(TagChange::Add {
        allergies: parse_tags(map.all_values(PREFIX_ALLERGY))?,
        conditions: parse_tags(map.all_values(PREFIX_CONDITION))?,
        insurances: parse_tags(map.all_values(PREFIX_INSURANCE))?,
    })
}

/// Parses `OLD=NEW`. Exactly one `=` with a non-blank label on each side.
fn parse_tag_edit(edit: &str) -> ParseResult<(Tag, Tag)> {
    let mut halves = edit.split('=');
    let (Some(old), Some(new), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(ParseError::InvalidTagEdit);
    };

    let old = parse_tag(old).map_err(|_| ParseError::InvalidTagEdit)?;
    let new = parse_tag(new).map_err(|_| ParseError::InvalidTagEdit)?;
    Ok((old, new))
}
