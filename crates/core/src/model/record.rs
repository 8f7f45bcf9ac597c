//! Patient records and their tags.
//!
//! A [`Record`] is a value: every change produces a new `Record` and the store swaps it in
//! for the old one. Nothing here mutates a record that is already held by a store.

use crate::constants::MAX_CONDITION_WORDS;
use medbook_types::{NonEmptyText, TagLabel, TextError, WordLimitedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A free-text medical condition note of at most [`MAX_CONDITION_WORDS`] words.
pub type ConditionNote = WordLimitedText<MAX_CONDITION_WORDS>;

/// A labelled tag. Two tags are equal when their normalised labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(TagLabel);

impl Tag {
    pub fn new(label: impl AsRef<str>) -> Result<Self, TextError> {
        Ok(Self(TagLabel::new(label)?))
    }

    pub fn label(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The categories a record partitions its tags into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Allergy,
    Condition,
    Insurance,
}

impl TagCategory {
    pub const ALL: [TagCategory; 3] = [
        TagCategory::Allergy,
        TagCategory::Condition,
        TagCategory::Insurance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagCategory::Allergy => "allergy",
            TagCategory::Condition => "condition",
            TagCategory::Insurance => "insurance",
        }
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One patient in the record book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    name: NonEmptyText,
    #[serde(default)]
    allergies: BTreeSet<Tag>,
    #[serde(default)]
    conditions: BTreeSet<Tag>,
    #[serde(default)]
    insurances: BTreeSet<Tag>,
    #[serde(default)]
    medical_conditions: Vec<ConditionNote>,
}

impl Record {
    /// Creates a record with the given name and no tags or condition notes.
    pub fn new(name: NonEmptyText) -> Self {
        Self {
            name,
            allergies: BTreeSet::new(),
            conditions: BTreeSet::new(),
            insurances: BTreeSet::new(),
            medical_conditions: Vec::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn tags(&self, category: TagCategory) -> &BTreeSet<Tag> {
        match category {
            TagCategory::Allergy => &self.allergies,
            TagCategory::Condition => &self.conditions,
            TagCategory::Insurance => &self.insurances,
        }
    }

    fn tags_mut(&mut self, category: TagCategory) -> &mut BTreeSet<Tag> {
        match category {
            TagCategory::Allergy => &mut self.allergies,
            TagCategory::Condition => &mut self.conditions,
            TagCategory::Insurance => &mut self.insurances,
        }
    }

    pub fn medical_conditions(&self) -> &[ConditionNote] {
        &self.medical_conditions
    }

    /// Returns true if any category holds `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        TagCategory::ALL
            .iter()
            .any(|category| self.tags(*category).contains(tag))
    }

    /// Returns a copy of this record with `note` appended to its condition notes.
    pub fn with_added_condition(&self, note: ConditionNote) -> Record {
        let mut updated = self.clone();
        updated.medical_conditions.push(note);
        updated
    }

    /// Returns a copy of this record with `tags` merged into `category`.
    pub fn with_added_tags<'a>(
        &self,
        category: TagCategory,
        tags: impl IntoIterator<Item = &'a Tag>,
    ) -> Record {
        let mut updated = self.clone();
        updated.tags_mut(category).extend(tags.into_iter().cloned());
        updated
    }

    /// Returns a copy of this record with `tags` removed from every category.
    ///
    /// Labels the record does not carry are ignored.
    pub fn with_removed_tags<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> Record {
        let mut updated = self.clone();
        for tag in tags {
            for category in TagCategory::ALL {
                updated.tags_mut(category).remove(tag);
            }
        }
        updated
    }

    /// Returns a copy of this record with `old` replaced by `new` in every category holding `old`.
    ///
    /// If no category holds `old` the copy is identical to `self`.
    pub fn with_renamed_tag(&self, old: &Tag, new: &Tag) -> Record {
        let mut updated = self.clone();
        for category in TagCategory::ALL {
            let tags = updated.tags_mut(category);
            if tags.remove(old) {
                tags.insert(new.clone());
            }
        }
        updated
    }
}
