//! User-facing message text for the command pipeline.

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX: &str = "The patient index provided is invalid";
pub const MESSAGE_BLANK_TAG: &str = "Tag names should not be blank.";

pub const CONDITION_USAGE: &str = "condition: Adds a medical condition to the patient identified \
by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) CONDITION (must be 6 words or less)\n\
Example: condition 1 diabetes";
pub const CONDITION_TOO_LONG: &str =
    "The input condition is too long! Please summarise it to 6 words or less.";

pub const TAG_USAGE: &str = "tag: Adds, deletes or edits tags of the patient identified \
by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) [a/ALLERGY]... [c/CONDITION]... \
[i/INSURANCE]... [td/TAG]... [te/OLD_TAG=NEW_TAG]\n\
Example: tag 1 a/peanuts c/asthma";
pub const TAG_EDIT_FORMAT: &str =
    "Invalid format for editing a tag. Correct format: te/OLD_TAG=NEW_TAG";
pub const TAG_ADD_AND_DELETE: &str = "Cannot add and delete tags in the same command.";
pub const TAG_DELETE_AND_EDIT: &str = "Cannot delete and edit tags in the same command.";
pub const TAG_EDIT_AND_ADD: &str = "Cannot edit and add tags in the same command.";

pub const LIST_USAGE: &str = "list: Lists all patients.\nExample: list";
pub const LIST_SUCCESS: &str = "Listed all patients";

pub const FIND_USAGE: &str = "find: Finds all patients whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alex bernice";

pub const HELP_USAGE: &str = "help: Shows usage instructions for every command.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting medbook as requested ...";

/// Usage text of every command, in the order `help` prints them.
pub const ALL_USAGES: [&str; 6] = [
    CONDITION_USAGE,
    TAG_USAGE,
    LIST_USAGE,
    FIND_USAGE,
    HELP_USAGE,
    EXIT_USAGE,
];

pub fn condition_success(name: &str, condition: &str) -> String {
    format!("You have successfully recorded {name}'s condition: {condition}")
}

pub fn patients_listed(count: usize) -> String {
    format!("{count} patients listed!")
}
