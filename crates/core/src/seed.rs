//! Seed records loaded into the record book at startup.
//!
//! A seed file is a YAML document with a top-level `records` list:
//!
//! ```yaml
//! records:
//!   - name: Alex Yeoh
//!     allergies: [peanuts]
//!     medical_conditions: [type 2 diabetes]
//!   - name: Bernice Yu
//! ```
//!
//! Entries that fail validation, or repeat the name of an earlier entry, are logged and
//! skipped. A document that is not valid YAML, or has no `records` list, is an error.

use crate::error::{CoreError, CoreResult};
use crate::model::{Record, RecordBook};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedDocument {
    records: Vec<serde_yaml::Value>,
}

/// Parses seed records from YAML text.
pub fn parse_seed_records(yaml: &str) -> CoreResult<Vec<Record>> {
    let document: SeedDocument =
        serde_yaml::from_str(yaml).map_err(CoreError::YamlDeserialization)?;

    let mut records = Vec::with_capacity(document.records.len());
    for (position, value) in document.records.into_iter().enumerate() {
        match serde_yaml::from_value::<Record>(value) {
            Ok(record) if records.iter().any(|r: &Record| r.name() == record.name()) => {
                tracing::warn!(
                    "skipping seed record {}: duplicate patient {}",
                    position + 1,
                    record.name()
                );
            }
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("skipping seed record {}: {}", position + 1, e);
            }
        }
    }

    Ok(records)
}

/// Reads a seed file and builds a record book from it.
pub fn load_record_book(path: &Path) -> CoreResult<RecordBook> {
    let contents = std::fs::read_to_string(path).map_err(CoreError::FileRead)?;
    let records = parse_seed_records(&contents)?;
    tracing::info!("loaded {} seed records from {}", records.len(), path.display());
    RecordBook::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tag, TagCategory};
    use std::io::Write;

    const SAMPLE: &str = r#"records:
  - name: Alex Yeoh
    allergies: [Peanuts, peanuts]
    insurances: [aviva]
    medical_conditions:
      - type 2 diabetes
  - name: Bernice Yu
"#;

    #[test]
    fn parses_records_and_normalises_labels() {
        let records = parse_seed_records(SAMPLE).expect("parse seed");
        assert_eq!(records.len(), 2);

        let alex = &records[0];
        assert_eq!(alex.name().as_str(), "Alex Yeoh");
        assert_eq!(alex.tags(TagCategory::Allergy).len(), 1);
        assert!(alex
            .tags(TagCategory::Insurance)
            .contains(&Tag::new("aviva").unwrap()));
        assert_eq!(alex.medical_conditions()[0].as_str(), "type 2 diabetes");
        assert!(records[1].medical_conditions().is_empty());
    }

    #[test]
    fn skips_invalid_entries() {
        let input = r#"records:
  - name: "   "
  - name: Charlotte Oliveiro
  - name: David Li
    unexpected_key: true
"#;
        let records = parse_seed_records(input).expect("parse seed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name().as_str(), "Charlotte Oliveiro");
    }

    #[test]
    fn skips_entries_repeating_an_earlier_name() {
        let input = r#"records:
  - name: Alex Yeoh
    allergies: [pollen]
  - name: Alex Yeoh
  - name: Bernice Yu
"#;
        let records = parse_seed_records(input).expect("parse seed");
        let names: Vec<_> = records.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alex Yeoh", "Bernice Yu"]);
        assert_eq!(records[0].tags(TagCategory::Allergy).len(), 1);
    }

    #[test]
    fn rejects_document_without_records_list() {
        let err = parse_seed_records("patients: []\n").expect_err("wrong top-level key");
        assert!(matches!(err, CoreError::YamlDeserialization(_)));
    }

    #[test]
    fn loads_record_book_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write seed");

        let book = load_record_book(file.path()).expect("load seed");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_record_book(&dir.path().join("absent.yaml")).expect_err("missing file");
        assert!(matches!(err, CoreError::FileRead(_)));
    }
}
