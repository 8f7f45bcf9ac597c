use super::CommandOutcome;
use crate::logic::error::CommandResult;
use crate::logic::messages::patients_listed;
use crate::model::{Model, RecordFilter};

/// Filters the displayed records to names containing any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutcome> {
        model.update_filter(RecordFilter::NameContainsKeywords(self.keywords.clone()));
        let shown = model.filtered_records().len();
        Ok(CommandOutcome::new(patients_listed(shown)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::test_support::{record, CountingModel};

    #[test]
    fn reports_number_of_matches() {
        let mut model = CountingModel::with_records(vec![
            record("Alex Yeoh"),
            record("Bernice Yu"),
            record("Alex Tan"),
        ]);

        let outcome = FindCommand::new(vec!["alex".into()])
            .execute(&mut model)
            .expect("find succeeds");

        assert_eq!(outcome.feedback, "2 patients listed!");
        assert_eq!(model.filtered_records().len(), 2);
        assert_eq!(model.replacements, 0);
    }
}
