//! Constants used throughout the medbook core crate.
//!
//! Command words, prefixes and limits live here so the parsers, the commands and the usage
//! text all agree on them.

/// Maximum number of whitespace-separated words in a recorded condition.
pub const MAX_CONDITION_WORDS: usize = 6;

/// Prompt shown by the interactive loop when none is configured.
pub const DEFAULT_PROMPT: &str = "medbook> ";

/// Command word for recording a medical condition.
pub const CONDITION_COMMAND_WORD: &str = "condition";

/// Command word for adding, deleting or editing tags.
pub const TAG_COMMAND_WORD: &str = "tag";

/// Command word for clearing the displayed filter.
pub const LIST_COMMAND_WORD: &str = "list";

/// Command word for filtering the displayed records by name.
pub const FIND_COMMAND_WORD: &str = "find";

/// Command word for showing usage of every command.
pub const HELP_COMMAND_WORD: &str = "help";

/// Command word for leaving the interactive loop.
pub const EXIT_COMMAND_WORD: &str = "exit";
