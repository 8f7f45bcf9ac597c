//! # medbook core
//!
//! Command interpreter for a patient record book:
//! - [`model`]: patient records with categorised tags and condition notes, and the store
//! - [`logic`]: the tokenizer, field and command parsers, and executable commands
//! - [`seed`]: loading the initial records from YAML at startup
//!
//! **No terminal concerns**: reading lines and printing results belongs in the `medbook` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use logic::{
    execute_line, parse_command, Command, CommandOutcome, ErrorKind, InterpreterService,
    LogicError, LogicResult,
};
pub use model::{ConditionNote, Model, Record, RecordBook, RecordFilter, Tag, TagCategory};

pub use medbook_types::{NonEmptyText, TagLabel, TextError, WordLimitedText};
