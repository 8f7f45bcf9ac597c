//! Splits an argument string into a preamble and prefix-tagged values.
//!
//! ```text
//! "1 a/peanuts a/pollen c/asthma"
//!  ^ preamble "1"
//!    ^^^^^^^^^ ^^^^^^^^ a/ -> ["peanuts", "pollen"]
//!                       ^^^^^^^^ c/ -> ["asthma"]
//! ```
//!
//! A prefix only counts when it starts the string or follows whitespace, so a value such as
//! `hep/a` is never split. When several prefixes match at one position the longest wins.

use super::syntax::Prefix;
use std::collections::HashMap;

/// Result of tokenizing one argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Every value given for `prefix`, in the order they appeared.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.all_values(prefix).last().map(String::as_str)
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Tokenizes `args` using `prefixes` as the recognised markers.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let preamble_end = positions.first().map_or(args.len(), |p| p.start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |next| next.start);
        multimap
            .values
            .entry(position.prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    let mut ordered: Vec<Prefix> = prefixes.iter().copied().filter(|p| !p.is_empty()).collect();
    ordered.sort_by_key(|p| std::cmp::Reverse(p.len()));

    let mut positions = Vec::new();
    let mut at_boundary = true;
    let mut skip_until = 0;

    for (offset, ch) in args.char_indices() {
        if offset < skip_until {
            continue;
        }

        if at_boundary {
            let rest = &args[offset..];
            if let Some(prefix) = ordered.iter().find(|p| rest.starts_with(p.as_str())) {
                positions.push(PrefixPosition {
                    prefix: *prefix,
                    start: offset,
                });
                skip_until = offset + prefix.len();
                at_boundary = false;
                continue;
            }
        }

        at_boundary = ch.is_whitespace();
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::syntax::{
        PREFIX_ALLERGY, PREFIX_CONDITION, PREFIX_INSURANCE, PREFIX_TAG_DELETE, PREFIX_TAG_EDIT,
    };

    const TAG_PREFIXES: [Prefix; 5] = [
        PREFIX_ALLERGY,
        PREFIX_CONDITION,
        PREFIX_INSURANCE,
        PREFIX_TAG_DELETE,
        PREFIX_TAG_EDIT,
    ];

    #[test]
    fn splits_preamble_and_repeated_prefixes() {
        let map = tokenize("1 a/peanuts a/pollen c/asthma", &TAG_PREFIXES);

        assert_eq!(map.preamble(), "1");
        assert_eq!(map.all_values(PREFIX_ALLERGY), ["peanuts", "pollen"]);
        assert_eq!(map.all_values(PREFIX_CONDITION), ["asthma"]);
        assert!(map.all_values(PREFIX_INSURANCE).is_empty());
    }

    #[test]
    fn no_prefixes_leaves_everything_in_preamble() {
        let map = tokenize("  1 some text  ", &TAG_PREFIXES);
        assert_eq!(map.preamble(), "1 some text");
        assert!(!map.is_present(PREFIX_ALLERGY));
    }

    #[test]
    fn prefix_inside_a_word_is_not_split() {
        let map = tokenize("2 c/hep/a a/hay/fever", &TAG_PREFIXES);
        assert_eq!(map.all_values(PREFIX_CONDITION), ["hep/a"]);
        assert_eq!(map.all_values(PREFIX_ALLERGY), ["hay/fever"]);
    }

    #[test]
    fn prefix_at_start_of_string_is_recognised() {
        let map = tokenize("a/dust", &TAG_PREFIXES);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_ALLERGY), Some("dust"));
    }

    #[test]
    fn empty_value_is_kept() {
        let map = tokenize("1 td/", &TAG_PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG_DELETE), [""]);
        assert!(map.is_present(PREFIX_TAG_DELETE));
    }

    #[test]
    fn value_keeps_inner_whitespace() {
        let map = tokenize("1 a/peanut   butter  i/aviva", &TAG_PREFIXES);
        assert_eq!(map.value(PREFIX_ALLERGY), Some("peanut   butter"));
        assert_eq!(map.value(PREFIX_INSURANCE), Some("aviva"));
    }

    #[test]
    fn longest_prefix_wins() {
        let short = Prefix::new("t");
        let long = Prefix::new("te/");
        let map = tokenize("1 te/old=new tx", &[short, long]);
        assert_eq!(map.value(long), Some("old=new"));
        assert_eq!(map.value(short), Some("x"));
    }

    #[test]
    fn value_returns_last_occurrence() {
        let map = tokenize("1 te/a=b te/c=d", &TAG_PREFIXES);
        assert_eq!(map.value(PREFIX_TAG_EDIT), Some("c=d"));
    }
}
