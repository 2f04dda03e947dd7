//! Dictionary configuration module.
//!
//! Where the text dictionary lives and how its lines are split.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path of the dictionary file (None means it must be given on the command line)
    pub path: Option<PathBuf>,

    /// Separator between the word and its value on each line
    pub separator: String,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: String,

    /// Whether malformed lines are skipped with a warning instead of failing the load
    pub skip_malformed: bool,

    /// Whether to release spare child-array capacity after loading
    pub shrink_after_load: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            separator: "\t".to_string(),
            comment_prefix: "#".to_string(),
            skip_malformed: true,
            shrink_after_load: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.separator must not be empty".to_string(),
            ));
        }

        if self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.comment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
