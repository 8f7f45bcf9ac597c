//! The record store the commands run against.
//!
//! [`Model`] is the capability a command needs: read the displayed sequence, replace one record
//! by identity, and change the display filter. [`RecordBook`] is the in-memory implementation
//! the interpreter runs with.

use super::record::Record;
use crate::error::{CoreError, CoreResult};

/// Predicate deciding which records appear in the displayed sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record, in store order.
    #[default]
    All,
    /// Records whose name contains any of the keywords as a whole word, ignoring case.
    NameContainsKeywords(Vec<String>),
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::NameContainsKeywords(keywords) => {
                record.name().as_str().split_whitespace().any(|word| {
                    let word = word.to_lowercase();
                    keywords
                        .iter()
                        .any(|keyword| word == keyword.to_lowercase())
                })
            }
        }
    }
}

/// Store capability consumed by command execution.
pub trait Model {
    /// The records currently displayed to the user, in display order.
    fn filtered_records(&self) -> Vec<&Record>;

    /// Replaces the record structurally equal to `target` with `edited`, in the same slot.
    fn replace_record(&mut self, target: &Record, edited: Record) -> CoreResult<()>;

    /// Changes which records are displayed.
    fn update_filter(&mut self, filter: RecordFilter);
}

/// In-memory ordered collection of records with a display filter.
///
/// No two records share a name, so structural identity always picks out exactly one slot.
#[derive(Clone, Debug, Default)]
pub struct RecordBook {
    records: Vec<Record>,
    filter: RecordFilter,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `records`, failing on the first name already present.
    pub fn from_records(records: Vec<Record>) -> CoreResult<Self> {
        let mut book = Self::new();
        for record in records {
            book.add_record(record)?;
        }
        Ok(book)
    }

    pub fn has_record_named(&self, record: &Record) -> bool {
        self.records.iter().any(|r| r.name() == record.name())
    }

    pub fn add_record(&mut self, record: Record) -> CoreResult<()> {
        if self.has_record_named(&record) {
            return Err(CoreError::DuplicateRecord(record.name().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Every record regardless of the current filter.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Model for RecordBook {
    fn filtered_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    fn replace_record(&mut self, target: &Record, edited: Record) -> CoreResult<()> {
        let slot = self
            .records
            .iter()
            .position(|record| record == target)
            .ok_or_else(|| CoreError::RecordNotFound(target.name().to_string()))?;

        let clashes = self
            .records
            .iter()
            .enumerate()
            .any(|(i, record)| i != slot && record.name() == edited.name());
        if clashes {
            return Err(CoreError::DuplicateRecord(edited.name().to_string()));
        }

        self.records[slot] = edited;
        Ok(())
    }

    fn update_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
    }
}
