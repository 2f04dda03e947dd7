// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie nodes and the child-array maintenance algorithm.
//!
//! Every node below the root keeps its children in a `Vec` sorted by
//! character. Lookups binary-search that array; insertions either land at the
//! computed insertion point or merge into the existing node with the same key.
//! Merging is driven by the [`Status`] of the *request* node, which lets the
//! owning trie express "insert pass-through", "insert word" and "delete word"
//! as the same `add_child` call.

use super::array_tool;
use super::status::Status;

/// Capabilities shared by the root and every node below it.
///
/// The root and [`Node`] differ only in how their child arrays grow; merge
/// semantics are the same for both.
pub trait BaseNode<V> {
    /// Inserts `node` among the children, merging with an existing child of
    /// the same key.
    ///
    /// # Returns
    ///
    /// `true` if the set of words stored below this node observably changed
    /// (a new child was inserted, a deleted word was restored, or a word was
    /// deleted).
    fn add_child(&mut self, node: Node<V>) -> bool;

    /// Returns the child keyed by `c`.
    fn get_child(&self, c: char) -> Option<&Node<V>>;

    /// Returns the child keyed by `c` for in-place mutation.
    fn get_child_mut(&mut self, c: char) -> Option<&mut Node<V>>;

    /// Adds a pass-through request for `c` and returns the resulting child.
    ///
    /// Equivalent to `add_child(Node::pass_through(c))` followed by
    /// `get_child_mut(c)`, using a single search.
    fn pass_through_child(&mut self, c: char) -> &mut Node<V>;

    /// Iterates over the children in ascending key order.
    fn children<'a>(&'a self) -> impl Iterator<Item = &'a Node<V>> + 'a
    where
        V: 'a;

    /// Lifecycle state of this node.
    fn status(&self) -> Status;

    /// Value of the word ending at this node, if any.
    fn value(&self) -> Option<&V>;

    /// Releases spare capacity held by this subtree's child arrays.
    fn shrink_to_fit(&mut self);

    /// Walks `path` one character at a time from this node.
    ///
    /// Returns `None` for an empty path or when the walk falls off the trie.
    fn transit(&self, path: &str) -> Option<&Node<V>> {
        let mut chars = path.chars();
        let mut node = self.get_child(chars.next()?)?;
        for c in chars {
            node = node.get_child(c)?;
        }
        Some(node)
    }
}

/// A trie node at depth two or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    /// Character this node represents at its depth
    c: char,

    /// Lifecycle state
    status: Status,

    /// Value of the word ending here (present iff `status.is_word()`)
    value: Option<V>,

    /// Children sorted ascending by `c`, unique by key
    child: Vec<Node<V>>,
}

impl<V> Node<V> {
    /// Creates a node with an explicit status and value.
    pub fn new(c: char, status: Status, value: Option<V>) -> Self {
        Self {
            c,
            status,
            value,
            child: Vec::new(),
        }
    }

    /// Request node for a position that a longer word passes through.
    pub fn pass_through(c: char) -> Self {
        Self::new(c, Status::NotWord, None)
    }

    /// Request node for a word ending at `c`.
    pub fn word_end(c: char, value: V) -> Self {
        Self::new(c, Status::WordEnd, Some(value))
    }

    /// Request node that logically deletes the word ending at `c`.
    pub fn delete_marker(c: char) -> Self {
        Self::new(c, Status::Undefined, None)
    }

    /// The character this node represents.
    #[inline]
    pub fn c(&self) -> char {
        self.c
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Mutable access to the value of a word ending here.
    ///
    /// Returns `None` for pass-through and deleted positions.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Returns `true` if a live word ends at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.status.is_word()
    }

    /// The sorted child array.
    #[inline]
    pub fn children(&self) -> &[Node<V>] {
        &self.child
    }

    /// Folds a request for the same key into this node.
    ///
    /// See [`BaseNode::add_child`] for the meaning of the return value.
    pub(crate) fn merge(&mut self, request: Node<V>) -> bool {
        debug_assert_eq!(self.c, request.c, "merging nodes with different keys");

        match request.status {
            Status::Undefined => {
                if self.status == Status::NotWord {
                    return false;
                }
                self.status = Status::NotWord;
                self.value = None;
                true
            }
            // Promotion only; never counted as a change.
            Status::NotWord => {
                if self.status == Status::WordEnd {
                    self.status = Status::WordMiddle;
                }
                false
            }
            Status::WordEnd | Status::WordMiddle => {
                debug_assert!(request.value.is_some(), "word request without a value");

                match self.status {
                    Status::WordEnd => {}
                    // A revived leaf is a plain word end again, not WordMiddle.
                    Status::NotWord if self.child.is_empty() => self.status = Status::WordEnd,
                    _ => self.status = Status::WordMiddle,
                }
                let restored = self.value.is_none();
                self.value = request.value;
                restored
            }
        }
    }
}

/// Inserts or merges `node` into a sorted child array.
///
/// A delete marker for a key that is not present is dropped, so the array
/// only ever holds settled nodes.
pub(crate) fn insert_child<V>(children: &mut Vec<Node<V>>, node: Node<V>) -> bool {
    match array_tool::search_by_node(children, &node) {
        Ok(index) => children[index].merge(node),
        Err(_) if node.status == Status::Undefined => false,
        Err(insert) => {
            children.insert(insert, node);
            true
        }
    }
}

/// Adds a pass-through request for `c` and returns the resulting child.
pub(crate) fn pass_through_child<V>(children: &mut Vec<Node<V>>, c: char) -> &mut Node<V> {
    let index = match array_tool::search_by_char(children, c) {
        Ok(index) => {
            children[index].merge(Node::pass_through(c));
            index
        }
        Err(insert) => {
            children.insert(insert, Node::pass_through(c));
            insert
        }
    };
    &mut children[index]
}

pub(crate) fn find_child<V>(children: &[Node<V>], c: char) -> Option<&Node<V>> {
    array_tool::search_by_char(children, c)
        .ok()
        .map(|index| &children[index])
}

pub(crate) fn find_child_mut<V>(children: &mut [Node<V>], c: char) -> Option<&mut Node<V>> {
    match array_tool::search_by_char(children, c) {
        Ok(index) => Some(&mut children[index]),
        Err(_) => None,
    }
}

impl<V> BaseNode<V> for Node<V> {
    fn add_child(&mut self, node: Node<V>) -> bool {
        insert_child(&mut self.child, node)
    }

    fn get_child(&self, c: char) -> Option<&Node<V>> {
        find_child(&self.child, c)
    }

    fn get_child_mut(&mut self, c: char) -> Option<&mut Node<V>> {
        find_child_mut(&mut self.child, c)
    }

    fn pass_through_child(&mut self, c: char) -> &mut Node<V> {
        pass_through_child(&mut self.child, c)
    }

    fn children<'a>(&'a self) -> impl Iterator<Item = &'a Node<V>> + 'a
    where
        V: 'a,
    {
        self.child.iter()
    }

    fn status(&self) -> Status {
        self.status
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn shrink_to_fit(&mut self) {
        self.child.shrink_to_fit();
        for child in &mut self.child {
            BaseNode::shrink_to_fit(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn keys<V>(node: &Node<V>) -> String {
        node.children().iter().map(Node::c).collect()
    }

    /// Builds a settled child `x` under a fresh parent.
    fn parent_with(status: Status, value: Option<u32>, grandchild: bool) -> Node<u32> {
        let mut existing = Node::new('x', status, value);
        if grandchild {
            existing.add_child(Node::word_end('y', 99));
        }
        let mut parent = Node::pass_through('p');
        parent.add_child(existing);
        parent
    }

    #[test]
    fn test_insert_keeps_children_sorted() {
        let mut node = Node::<u32>::pass_through('r');
        for c in "mdqazk".chars() {
            assert!(node.add_child(Node::pass_through(c)));
        }
        assert_eq!(keys(&node), "adkmqz");
    }

    #[test]
    fn test_get_child() {
        let mut node = Node::pass_through('r');
        assert!(node.get_child('a').is_none());

        node.add_child(Node::word_end('b', 2));
        node.add_child(Node::word_end('a', 1));

        assert_eq!(node.get_child('a').and_then(Node::value), Some(&1));
        assert_eq!(node.get_child('b').and_then(Node::value), Some(&2));
        assert!(node.get_child('c').is_none());
    }

    #[test]
    fn test_repeated_pass_through_is_idempotent() {
        let mut node = Node::<u32>::pass_through('r');
        assert!(node.add_child(Node::pass_through('a')));
        assert!(!node.add_child(Node::pass_through('a')));
        assert!(!node.add_child(Node::pass_through('a')));

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.get_child('a').map(Node::status), Some(Status::NotWord));
    }

    #[test]
    fn test_delete_marker_for_missing_key_is_dropped() {
        let mut node = Node::<u32>::pass_through('r');
        assert!(!node.add_child(Node::delete_marker('a')));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_delete_keeps_descendants() {
        let mut parent = parent_with(Status::WordMiddle, Some(1), true);
        assert!(parent.add_child(Node::delete_marker('x')));

        let x = parent.get_child('x').unwrap();
        assert_eq!(x.status(), Status::NotWord);
        assert_eq!(x.value(), None);
        assert_eq!(x.get_child('y').and_then(Node::value), Some(&99));
    }

    #[test]
    fn test_word_end_overwrites_value() {
        let mut parent = parent_with(Status::WordEnd, Some(1), false);
        assert!(!parent.add_child(Node::word_end('x', 2)));
        assert_eq!(parent.get_child('x').and_then(Node::value), Some(&2));
    }

    #[test]
    fn test_pass_through_child_matches_add_then_get() {
        let mut fused = parent_with(Status::WordEnd, Some(1), false);
        let mut manual = fused.clone();

        fused.pass_through_child('x');
        manual.add_child(Node::pass_through('x'));
        assert_eq!(fused, manual);

        let created = fused.pass_through_child('a');
        assert_eq!(created.status(), Status::NotWord);
        assert_eq!(keys(&fused), "ax");
    }

    /// Collects child keys through the trait, as generic callers see them.
    fn trait_keys<V, N: BaseNode<V>>(node: &N) -> String {
        node.children().map(Node::c).collect()
    }

    #[test]
    fn test_children_through_trait() {
        let mut parent = Node::<u32>::pass_through('p');
        parent.add_child(Node::word_end('x', 1));
        assert_eq!(trait_keys(&parent), "x");

        // Deleted leaf revived as a word end, then extended
        assert!(parent.add_child(Node::delete_marker('x')));
        assert!(parent.add_child(Node::word_end('x', 2)));
        assert_eq!(parent.get_child('x').map(Node::status), Some(Status::WordEnd));

        assert!(!parent.add_child(Node::pass_through('x')));
        assert_eq!(parent.get_child('x').map(Node::status), Some(Status::WordMiddle));

        assert!(!parent.add_child(Node::delete_marker('q')));
        assert_eq!(trait_keys(&parent), "x");
        assert_eq!(BaseNode::children(&parent).count(), 1);
    }

    #[test]
    fn test_transit() {
        let mut root = Node::<u32>::pass_through('r');
        root.pass_through_child('c')
            .pass_through_child('a')
            .add_child(Node::word_end('t', 10));

        assert_eq!(root.transit("cat").and_then(Node::value), Some(&10));
        assert_eq!(root.transit("ca").map(Node::status), Some(Status::NotWord));
        assert!(root.transit("cab").is_none());
        assert!(root.transit("").is_none());
    }

    #[test]
    fn test_shrink_to_fit_preserves_contents() {
        let mut node = Node::<u32>::pass_through('r');
        for (i, c) in "hello".chars().enumerate() {
            node.add_child(Node::word_end(c, i as u32));
        }
        let before = node.clone();
        BaseNode::shrink_to_fit(&mut node);
        assert_eq!(node, before);
    }

    // (existing status, existing value, has children, request) => (status, value, changed)
    #[test_case(Status::NotWord, None, false, Node::delete_marker('x') => (Status::NotWord, None, false) ; "delete pass-through")]
    #[test_case(Status::WordEnd, Some(1), false, Node::delete_marker('x') => (Status::NotWord, None, true) ; "delete word end")]
    #[test_case(Status::WordMiddle, Some(1), true, Node::delete_marker('x') => (Status::NotWord, None, true) ; "delete word middle")]
    #[test_case(Status::NotWord, None, true, Node::pass_through('x') => (Status::NotWord, None, false) ; "pass through pass-through")]
    #[test_case(Status::WordEnd, Some(1), false, Node::pass_through('x') => (Status::WordMiddle, Some(1), false) ; "pass through word end promotes silently")]
    #[test_case(Status::WordMiddle, Some(1), true, Node::pass_through('x') => (Status::WordMiddle, Some(1), false) ; "pass through word middle")]
    #[test_case(Status::NotWord, None, false, Node::word_end('x', 5) => (Status::WordEnd, Some(5), true) ; "word over childless pass-through")]
    #[test_case(Status::NotWord, None, true, Node::word_end('x', 5) => (Status::WordMiddle, Some(5), true) ; "word over pass-through with children")]
    #[test_case(Status::WordEnd, Some(1), false, Node::word_end('x', 5) => (Status::WordEnd, Some(5), false) ; "word over word end")]
    #[test_case(Status::WordMiddle, Some(1), true, Node::word_end('x', 5) => (Status::WordMiddle, Some(5), false) ; "word over word middle")]
    fn test_merge_transitions(
        status: Status,
        value: Option<u32>,
        grandchild: bool,
        request: Node<u32>,
    ) -> (Status, Option<u32>, bool) {
        let mut parent = parent_with(status, value, grandchild);
        let changed = parent.add_child(request);

        assert_eq!(parent.children().len(), 1, "merge must not grow the array");
        let x = parent.get_child('x').unwrap();
        (x.status(), x.value().copied(), changed)
    }
}
