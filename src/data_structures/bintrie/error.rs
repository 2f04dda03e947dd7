// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for BinTrie.

/// Errors that can occur in BinTrie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key has more characters than the trie accepts.
    #[error("Key '{key}' exceeds maximum length of {max_chars} characters")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed number of characters.
        max_chars: usize,
    },
}

/// Result type for BinTrie operations
pub type TrieResult<T> = Result<T, TrieError>;
