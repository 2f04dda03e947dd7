//! Dictionary loading error module.
//!
//! This module defines error types that may occur while reading a text
//! dictionary into a trie.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::bintrie::TrieError;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// No dictionary path was given on the command line or in configuration.
    #[error("No dictionary path configured")]
    NoPath,

    /// The dictionary file could not be opened.
    #[error("Failed to open dictionary {path:?}: {source}")]
    Open {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read (IO failure or invalid UTF-8).
    #[error("Failed to read dictionary line {line}: {source}")]
    Read {
        /// 1-based line number
        line: usize,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line has no word before the separator.
    #[error("Malformed dictionary line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// The trie rejected a word.
    #[error("Invalid word on dictionary line {line}: {source}")]
    InvalidWord {
        /// 1-based line number
        line: usize,
        /// Error returned by the trie
        #[source]
        source: TrieError,
    },
}
