//! The command pipeline: tokenize, parse, execute.
//!
//! ```text
//! line -> parse_command -> Command -> execute(&mut dyn Model) -> CommandOutcome
//! ```

pub mod commands;
pub mod error;
pub mod index;
pub mod messages;
pub mod parser_util;
pub mod parsers;
pub mod syntax;
pub mod tokenizer;

pub use commands::{Command, CommandOutcome};
pub use error::{
    CommandError, CommandResult, ErrorKind, LogicError, LogicResult, ParseError, ParseResult,
};
pub use index::Index;
pub use parsers::parse_command;

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::model::{Model, RecordBook};
use crate::seed::load_record_book;
use std::sync::Arc;

/// Parses and executes one command line against `model`.
pub fn execute_line(line: &str, model: &mut dyn Model) -> LogicResult<CommandOutcome> {
    let command = parse_command(line)?;
    Ok(command.execute(model)?)
}

/// Runs command lines against a record book, one at a time.
pub struct InterpreterService<M = RecordBook> {
    cfg: Arc<CoreConfig>,
    model: M,
}

impl InterpreterService<RecordBook> {
    /// Creates an interpreter over the configured seed records, or an empty book if none.
    pub fn new(cfg: Arc<CoreConfig>) -> CoreResult<Self> {
        let model = match cfg.seed_file() {
            Some(path) => load_record_book(path)?,
            None => RecordBook::new(),
        };
        Ok(Self { cfg, model })
    }
}

impl<M: Model> InterpreterService<M> {
    pub fn with_model(cfg: Arc<CoreConfig>, model: M) -> Self {
        Self { cfg, model }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Executes one line. A failure leaves the model unchanged.
    pub fn execute(&mut self, line: &str) -> LogicResult<CommandOutcome> {
        let result = execute_line(line, &mut self.model);
        if let Err(e) = &result {
            tracing::debug!(kind = ?e.kind(), "command failed: {}", e);
        }
        result
    }
}
