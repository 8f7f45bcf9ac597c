use super::{displayed_record, replace, CommandOutcome};
use crate::logic::error::CommandResult;
use crate::logic::index::Index;
use crate::logic::messages::condition_success;
use crate::model::{ConditionNote, Model};

/// Appends a condition note to the patient at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCommand {
    index: Index,
    condition: ConditionNote,
}

impl ConditionCommand {
    pub fn new(index: Index, condition: ConditionNote) -> Self {
        Self { index, condition }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn condition(&self) -> &ConditionNote {
        &self.condition
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutcome> {
        let target = displayed_record(model, self.index)?;
        let edited = target.with_added_condition(self.condition.clone());
        let feedback = condition_success(edited.name().as_str(), self.condition.as_str());

        replace(model, &target, edited)?;
        Ok(CommandOutcome::new(feedback))
    }
}
