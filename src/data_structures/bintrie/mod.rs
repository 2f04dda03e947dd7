// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! BinTrie: a sorted-array trie dictionary.
//!
//! A trie mapping words (character sequences) to values, built for
//! dictionaries of tens of thousands of entries that are loaded once and then
//! queried heavily by segmentation and keyword-matching code.
//!
//! Each node keeps its children in an array sorted by character and found by
//! binary search, which is far denser than a hash map per node. Node state is
//! a four-valued [`Status`], so one path can be a prefix, a word, or a
//! deleted word without restructuring the tree.
//!
//! # Features
//!
//! - Binary-search child lookup, O(log n) per level.
//! - Logical deletion: removing a word never detaches its descendants.
//! - Direct-indexed root for constant-time first-character lookup.
//! - Full-text matching: all hits, or greedy longest-match segmentation.
//!
//! # Example
//!
//! ```
//! use bintrie_lib::data_structures::bintrie::BinTrie;
//!
//! let mut trie = BinTrie::new();
//! trie.put("he", 1).unwrap();
//! trie.put("hers", 2).unwrap();
//!
//! assert_eq!(trie.get("he"), Some(&1));
//! assert_eq!(trie.get("her"), None);
//!
//! let hits: Vec<_> = trie
//!     .parse_longest("ushers")
//!     .into_iter()
//!     .map(|hit| (hit.begin, hit.end, *hit.value))
//!     .collect();
//! assert_eq!(hits, vec![(2, 6, 2)]);
//! ```
//!
//! # Concurrency
//!
//! Build first, then read. Mutation needs `&mut BinTrie`; any number of
//! threads may query a shared `&BinTrie` once building is done.

mod array_tool;
mod config;
mod error;
mod node;
mod root;
mod status;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use array_tool::{from_signed, search_by_char, search_by_node, to_signed};
pub use config::TrieConfig;
pub use error::{TrieError, TrieResult};
pub use node::{BaseNode, Node};
pub use root::{Root, RootLayout};
pub use status::Status;

/// A dictionary hit inside a piece of text.
///
/// `begin` and `end` are character offsets; the matched word is
/// `text.chars().skip(begin).take(end - begin)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit<'a, V> {
    /// Offset of the first character of the match
    pub begin: usize,

    /// Offset one past the last character of the match
    pub end: usize,

    /// Value stored for the matched word
    pub value: &'a V,
}

impl<V> Hit<'_, V> {
    /// Number of characters covered by the match.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Sorted-array trie dictionary.
///
/// # Examples
///
/// ```
/// use bintrie_lib::data_structures::bintrie::{BinTrie, RootLayout, TrieConfig};
///
/// let config = TrieConfig::new().with_root_layout(RootLayout::Sorted);
/// let mut trie = BinTrie::with_config(config);
///
/// assert!(trie.put("cat", 10).unwrap());
/// assert!(trie.remove("cat"));
/// assert!(trie.get("cat").is_none());
///
/// // The path survives the delete; re-inserting restores the word.
/// assert!(trie.transit("cat").is_some());
/// assert!(trie.put("cat", 20).unwrap());
/// assert_eq!(trie.get("cat"), Some(&20));
/// ```
#[derive(Debug, Clone)]
pub struct BinTrie<V> {
    /// The root node of the trie
    root: Root<V>,

    /// Number of live words
    size: usize,

    /// Configuration options
    config: TrieConfig,
}

impl<V> BinTrie<V> {
    /// Creates a new empty `BinTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `BinTrie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Root::new(config.root_layout),
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// The root node, for callers that walk the trie themselves.
    pub fn root(&self) -> &Root<V> {
        &self.root
    }

    /// Number of live words.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `key` or overwrites its value.
    ///
    /// Every character but the last is added as a pass-through node; the last
    /// one is added as a word end.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the word was not present (or had been deleted).
    /// * `Ok(false)` - the word existed and its value was replaced.
    /// * `Err(TrieError)` - the key is empty or too long.
    pub fn put<K: AsRef<str>>(&mut self, key: K, value: V) -> TrieResult<bool> {
        let key = key.as_ref();
        let chars: Vec<char> = key.chars().collect();
        if chars.len() > self.config.max_key_chars {
            return Err(TrieError::KeyTooLong {
                key: key.to_string(),
                max_chars: self.config.max_key_chars,
            });
        }
        let (last, path) = chars.split_last().ok_or(TrieError::EmptyKey)?;

        let added = match path.split_first() {
            None => self.root.add_child(Node::word_end(*last, value)),
            Some((first, rest)) => {
                let mut branch = self.root.pass_through_child(*first);
                for &c in rest {
                    branch = branch.pass_through_child(c);
                }
                branch.add_child(Node::word_end(*last, value))
            }
        };

        if added {
            self.size += 1;
        }
        Ok(added)
    }

    /// Returns the value of `key` if it is a live word.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        self.root
            .transit(key.as_ref())
            .filter(|node| node.is_word())
            .and_then(Node::value)
    }

    /// Returns a mutable reference to the value of `key` if it is a live word.
    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        let chars: Vec<char> = key.as_ref().chars().collect();
        self.transit_mut(&chars)
            .filter(|node| node.is_word())
            .and_then(Node::value_mut)
    }

    pub fn contains_key<K: AsRef<str>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Logically deletes `key`.
    ///
    /// The node stays in place with its descendants; only its status and
    /// value change. Absent paths are never created.
    ///
    /// # Returns
    ///
    /// `true` if a live word was deleted.
    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> bool {
        let chars: Vec<char> = key.as_ref().chars().collect();
        let Some((last, path)) = chars.split_last() else {
            return false;
        };

        let removed = if path.is_empty() {
            self.root.add_child(Node::delete_marker(*last))
        } else {
            match self.transit_mut(path) {
                Some(branch) => branch.add_child(Node::delete_marker(*last)),
                None => false,
            }
        };

        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns the node reached by walking `prefix`, word or not.
    pub fn transit<K: AsRef<str>>(&self, prefix: K) -> Option<&Node<V>> {
        self.root.transit(prefix.as_ref())
    }

    fn transit_mut(&mut self, path: &[char]) -> Option<&mut Node<V>> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.get_child_mut(*first)?;
        for &c in rest {
            node = node.get_child_mut(c)?;
        }
        Some(node)
    }

    /// Iterates over all live words in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::from_root(&self.root)
    }

    /// Iterates over the live words starting with `prefix`, ascending.
    ///
    /// An empty prefix yields every word.
    pub fn prefix_search<K: AsRef<str>>(&self, prefix: K) -> Iter<'_, V> {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return self.iter();
        }
        match self.root.transit(prefix) {
            Some(node) => Iter::from_node(prefix.to_string(), node),
            None => Iter::empty(),
        }
    }

    /// Finds every live word that is a prefix of `chars`.
    ///
    /// Returns `(length, value)` pairs, shortest first.
    fn prefix_matches<'a>(&'a self, chars: &[char]) -> Vec<(usize, &'a V)> {
        let mut matches = Vec::new();
        let Some((first, rest)) = chars.split_first() else {
            return matches;
        };
        let mut state = self.root.get_child(*first);
        let mut length = 1;
        while let Some(node) = state {
            if node.is_word() {
                if let Some(value) = node.value() {
                    matches.push((length, value));
                }
            }
            state = rest.get(length - 1).and_then(|&c| node.get_child(c));
            length += 1;
        }
        matches
    }

    /// Finds every live word that is a prefix of `text` starting at character
    /// offset `begin`.
    ///
    /// Returns `(word, value)` pairs, shortest first.
    pub fn common_prefix_search(&self, text: &str, begin: usize) -> Vec<(String, &V)> {
        let chars: Vec<char> = text.chars().skip(begin).collect();
        self.prefix_matches(&chars)
            .into_iter()
            .map(|(length, value)| (chars[..length].iter().collect(), value))
            .collect()
    }

    /// Finds every occurrence of every word in `text`.
    ///
    /// Occurrences may overlap. Hits are ordered by `begin`, then by length.
    pub fn parse(&self, text: &str) -> Vec<Hit<'_, V>> {
        let chars: Vec<char> = text.chars().collect();
        let mut hits = Vec::new();
        for begin in 0..chars.len() {
            for (length, value) in self.prefix_matches(&chars[begin..]) {
                hits.push(Hit {
                    begin,
                    end: begin + length,
                    value,
                });
            }
        }
        hits
    }

    /// Greedy longest-match segmentation of `text`.
    ///
    /// Scans left to right, taking the longest word at each position and
    /// resuming after it; characters that start no word are skipped. Hits
    /// never overlap.
    pub fn parse_longest(&self, text: &str) -> Vec<Hit<'_, V>> {
        let chars: Vec<char> = text.chars().collect();
        let mut hits = Vec::new();
        let mut begin = 0;
        while begin < chars.len() {
            match self.prefix_matches(&chars[begin..]).pop() {
                Some((length, value)) => {
                    hits.push(Hit {
                        begin,
                        end: begin + length,
                        value,
                    });
                    begin += length;
                }
                None => begin += 1,
            }
        }
        hits
    }

    /// Releases spare child-array capacity once building is done.
    pub fn shrink_to_fit(&mut self) {
        self.root.shrink_to_fit();
        tracing::debug!(words = self.size, "bintrie shrunk to fit");
    }

    /// Removes every word and node.
    pub fn clear(&mut self) {
        self.root.clear();
        self.size = 0;
    }
}

impl<V> Default for BinTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for BinTrie<V> {
    /// Inserts every pair, skipping keys the trie rejects.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(e) = self.put(key.as_ref(), value) {
                tracing::warn!(error = %e, "skipping invalid key");
            }
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for BinTrie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, V> IntoIterator for &'a BinTrie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the live words of a trie, in key order.
pub struct Iter<'a, V> {
    stack: Vec<(String, &'a Node<V>)>,
}

impl<'a, V> Iter<'a, V> {
    fn empty() -> Self {
        Self { stack: Vec::new() }
    }

    fn from_root(root: &'a Root<V>) -> Self {
        let children: Vec<&'a Node<V>> = BaseNode::children(root).collect();
        let stack = children
            .into_iter()
            .rev()
            .map(|child| (child.c().to_string(), child))
            .collect();
        Self { stack }
    }

    fn from_node(key: String, node: &'a Node<V>) -> Self {
        Self {
            stack: vec![(key, node)],
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for child in node.children().iter().rev() {
                let mut child_key = String::with_capacity(key.len() + child.c().len_utf8());
                child_key.push_str(&key);
                child_key.push(child.c());
                self.stack.push((child_key, child));
            }
            if node.is_word() {
                if let Some(value) = node.value() {
                    return Some((key, value));
                }
            }
        }
        None
    }
}
