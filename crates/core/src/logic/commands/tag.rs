use super::{displayed_record, replace, CommandOutcome};
use crate::logic::error::CommandResult;
use crate::logic::index::Index;
use crate::model::{Model, Record, Tag, TagCategory};
use std::collections::BTreeSet;

/// The single kind of tag change a `tag` command applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChange {
    /// Merge labels into each category. Any of the sets may be empty.
    Add {
        allergies: BTreeSet<Tag>,
        conditions: BTreeSet<Tag>,
        insurances: BTreeSet<Tag>,
    },
    /// Remove labels from every category. Absent labels are ignored.
    Delete(BTreeSet<Tag>),
    /// Rename `old` to `new` wherever `old` appears. A missing `old` changes nothing.
    Edit { old: Tag, new: Tag },
    /// Only an index was given.
    Unchanged,
}

impl TagChange {
    fn apply(&self, record: &Record) -> Record {
        match self {
            TagChange::Add {
                allergies,
                conditions,
                insurances,
            } => record
                .with_added_tags(TagCategory::Allergy, allergies)
                .with_added_tags(TagCategory::Condition, conditions)
                .with_added_tags(TagCategory::Insurance, insurances),
            TagChange::Delete(tags) => record.with_removed_tags(tags),
            TagChange::Edit { old, new } => record.with_renamed_tag(old, new),
            TagChange::Unchanged => record.clone(),
        }
    }

    fn describe(&self, name: &str) -> String {
        match self {
            TagChange::Add {
                allergies,
                conditions,
                insurances,
            } => {
                let groups: Vec<String> = [
                    (TagCategory::Allergy, allergies),
                    (TagCategory::Condition, conditions),
                    (TagCategory::Insurance, insurances),
                ]
                .into_iter()
                .filter(|(_, tags)| !tags.is_empty())
                .map(|(category, tags)| format!("{category}: {}", join_labels(tags)))
                .collect();
                format!("Added tags to {name}: {}", groups.join("; "))
            }
            TagChange::Delete(tags) => {
                format!("Deleted tags from {name}: {}", join_labels(tags))
            }
            TagChange::Edit { old, new } => format!("Edited tag for {name}: {old} -> {new}"),
            TagChange::Unchanged => format!("No tag changes made for {name}."),
        }
    }
}

fn join_labels(tags: &BTreeSet<Tag>) -> String {
    tags.iter().map(Tag::label).collect::<Vec<_>>().join(", ")
}

/// Adds, deletes or renames tags on the patient at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCommand {
    index: Index,
    change: TagChange,
}

impl TagCommand {
    pub fn new(index: Index, change: TagChange) -> Self {
        Self { index, change }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn change(&self) -> &TagChange {
        &self.change
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutcome> {
        let target = displayed_record(model, self.index)?;
        let edited = self.change.apply(&target);
        let feedback = self.change.describe(edited.name().as_str());

        replace(model, &target, edited)?;
        Ok(CommandOutcome::new(feedback))
    }
}
