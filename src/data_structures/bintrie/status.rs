// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lifecycle states of a trie node.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a node in a [`BinTrie`](super::BinTrie).
///
/// A single key position encodes every combination of "a word ends here" and
/// "the path continues below" through these four values, so inserting,
/// overwriting and logically deleting words never restructures the tree.
///
/// `Undefined` is only ever carried by a request node handed to
/// [`BaseNode::add_child`](super::BaseNode::add_child); a node stored in the
/// trie always settles on one of the other three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Delete marker. Never persisted.
    Undefined,

    /// Pass-through position: a prefix of some longer word, not a word itself.
    NotWord,

    /// A word ends here and the path continues below.
    WordMiddle,

    /// A word ends here. Promoted to `WordMiddle` once a deeper child is added.
    WordEnd,
}

impl Status {
    /// Returns `true` if a word terminates at a node in this state.
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(self, Status::WordMiddle | Status::WordEnd)
    }
}
