//! Executable commands.
//!
//! A [`Command`] holds only the validated arguments it needs. Executing it checks the index
//! against the records displayed right now, builds the replacement record, and asks the
//! [`Model`] to swap it in. All validation happens before the swap, so a failed command leaves
//! the store exactly as it was.

mod condition;
mod find;
mod tag;

pub use condition::ConditionCommand;
pub use find::FindCommand;
pub use tag::{TagChange, TagCommand};

use super::error::{CommandError, CommandResult};
use super::index::Index;
use super::messages::{ALL_USAGES, EXIT_ACKNOWLEDGEMENT, LIST_SUCCESS};
use crate::model::{Model, Record, RecordFilter};

/// What a successful command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    pub exit: bool,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }
}

/// Every command the interpreter understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Condition(ConditionCommand),
    Tag(TagCommand),
    Find(FindCommand),
    List,
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutcome> {
        match self {
            Command::Condition(command) => command.execute(model),
            Command::Tag(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::List => {
                model.update_filter(RecordFilter::All);
                Ok(CommandOutcome::new(LIST_SUCCESS))
            }
            Command::Help => Ok(CommandOutcome::new(ALL_USAGES.join("\n\n"))),
            Command::Exit => Ok(CommandOutcome {
                feedback: EXIT_ACKNOWLEDGEMENT.to_string(),
                exit: true,
            }),
        }
    }
}

/// Resolves `index` against the records displayed right now.
fn displayed_record(model: &dyn Model, index: Index) -> CommandResult<Record> {
    model
        .filtered_records()
        .get(index.zero_based())
        .map(|record| (*record).clone())
        .ok_or(CommandError::InvalidDisplayedIndex)
}

/// Swaps `edited` in for `target` and logs the change.
fn replace(model: &mut dyn Model, target: &Record, edited: Record) -> CommandResult<()> {
    let name = edited.name().to_string();
    model.replace_record(target, edited)?;
    tracing::info!(patient = %name, "record updated");
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::error::CoreResult;
    use crate::model::{Model, Record, RecordBook, RecordFilter};
    use medbook_types::NonEmptyText;

    /// A record book that counts replace calls.
    #[derive(Default)]
    pub struct CountingModel {
        pub book: RecordBook,
        pub replacements: usize,
    }

    impl CountingModel {
        pub fn with_records(records: Vec<Record>) -> Self {
            Self {
                book: RecordBook::from_records(records).expect("unique names"),
                replacements: 0,
            }
        }
    }

    impl Model for CountingModel {
        fn filtered_records(&self) -> Vec<&Record> {
            self.book.filtered_records()
        }

        fn replace_record(&mut self, target: &Record, edited: Record) -> CoreResult<()> {
            self.replacements += 1;
            self.book.replace_record(target, edited)
        }

        fn update_filter(&mut self, filter: RecordFilter) {
            self.book.update_filter(filter);
        }
    }

    pub fn record(name: &str) -> Record {
        Record::new(NonEmptyText::new(name).unwrap())
    }
}
