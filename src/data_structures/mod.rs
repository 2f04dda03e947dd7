//! Data structures for bintrie.
//!
//! This module contains the dictionary data structures backing text
//! segmentation and keyword matching. All implementations adhere to the
//! project requirements:
//! - No unsafe code
//! - Build-then-read usage: exclusive `&mut` access while building, shared reads afterwards
//! - Memory-dense layouts suited to dictionaries loaded once and queried heavily

pub mod bintrie;

// Re-export common data structures
pub use bintrie::{BinTrie, Hit, TrieConfig, TrieError, TrieResult};
