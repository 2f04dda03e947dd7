// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for BinTrie.

use serde::{Deserialize, Serialize};

use super::root::RootLayout;

/// Configuration options for a [`BinTrie`](super::BinTrie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Child-array growth policy of the root
    pub root_layout: RootLayout,

    /// Maximum number of characters in a key
    pub max_key_chars: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - root_layout: `RootLayout::Direct`
    /// - max_key_chars: 256
    pub fn new() -> Self {
        Self {
            root_layout: RootLayout::Direct,
            max_key_chars: 256,
        }
    }

    /// Set the growth policy of the root's child array.
    ///
    /// `Direct` spends a fixed table up front for constant-time first-level
    /// lookups, which pays off for large dictionaries. `Sorted` keeps the
    /// root as compact as every other node, which suits small tries.
    pub fn with_root_layout(mut self, root_layout: RootLayout) -> Self {
        self.root_layout = root_layout;
        self
    }

    /// Set the maximum number of characters accepted in a key.
    pub fn with_max_key_chars(mut self, max_key_chars: usize) -> Self {
        if max_key_chars == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_chars = max_key_chars;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
