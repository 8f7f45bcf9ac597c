//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the interpreter.
//! Nothing in the core reads environment variables itself.

use crate::constants::DEFAULT_PROMPT;
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    seed_file: Option<PathBuf>,
    prompt: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// A seed file, when given, must be an existing regular file. The prompt defaults to
    /// [`DEFAULT_PROMPT`] and must not be blank when supplied.
    pub fn new(seed_file: Option<PathBuf>, prompt: Option<String>) -> CoreResult<Self> {
        if let Some(path) = &seed_file {
            if !path.is_file() {
                return Err(CoreError::InvalidInput(format!(
                    "seed file {} does not exist or is not a file",
                    path.display()
                )));
            }
        }

        let prompt = match prompt {
            Some(p) if p.trim().is_empty() => {
                return Err(CoreError::InvalidInput("prompt cannot be empty".into()));
            }
            Some(p) => p,
            None => DEFAULT_PROMPT.to_string(),
        };

        Ok(Self { seed_file, prompt })
    }

    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
