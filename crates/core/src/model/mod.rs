//! Domain model: patient records and the store holding them.

pub mod record;
pub mod store;

pub use record::{ConditionNote, Record, Tag, TagCategory};
pub use store::{Model, RecordBook, RecordFilter};
