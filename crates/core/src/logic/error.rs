//! Failures raised while parsing or executing a command line.
//!
//! Every failure belongs to one [`ErrorKind`]. None of them leave the record book partially
//! changed: parse failures never see the store, and execution validates before replacing.

use super::messages::{
    CONDITION_TOO_LONG, MESSAGE_BLANK_TAG, MESSAGE_INVALID_INDEX,
    MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX, MESSAGE_UNKNOWN_COMMAND, TAG_ADD_AND_DELETE,
    TAG_DELETE_AND_EDIT, TAG_EDIT_AND_ADD, TAG_EDIT_FORMAT,
};
use crate::CoreError;

/// Broad class of a command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line does not match the command's grammar.
    Format,
    /// The line is well formed but a value in it is not acceptable.
    Validation,
    /// The command parsed but cannot run against the current record book.
    Execution,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand(String),
    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,
    #[error("{}", MESSAGE_BLANK_TAG)]
    BlankTag,
    #[error("Invalid command format! \n{}", CONDITION_TOO_LONG)]
    ConditionTooLong,
    #[error("{}", TAG_EDIT_FORMAT)]
    InvalidTagEdit,
    #[error("{}", TAG_ADD_AND_DELETE)]
    AddAndDeleteTags,
    #[error("{}", TAG_DELETE_AND_EDIT)]
    DeleteAndEditTags,
    #[error("{}", TAG_EDIT_AND_ADD)]
    EditAndAddTags,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidFormat { .. }
            | ParseError::UnknownCommand(_)
            | ParseError::AddAndDeleteTags
            | ParseError::DeleteAndEditTags
            | ParseError::EditAndAddTags => ErrorKind::Format,
            ParseError::InvalidIndex
            | ParseError::BlankTag
            | ParseError::ConditionTooLong
            | ParseError::InvalidTagEdit => ErrorKind::Validation,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PATIENT_DISPLAYED_INDEX)]
    InvalidDisplayedIndex,
    #[error("record book error: {0}")]
    Store(#[from] CoreError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Execution
    }
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Any failure of a single command line.
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl LogicError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogicError::Parse(e) => e.kind(),
            LogicError::Command(e) => e.kind(),
        }
    }
}

pub type LogicResult<T> = std::result::Result<T, LogicError>;
