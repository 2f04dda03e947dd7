// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Root node of a BinTrie.
//!
//! The first character of every key is resolved here. With the `Direct`
//! layout, characters of the Basic Multilingual Plane index a fixed table, so
//! the busiest level of the trie costs no search at all. Supplementary-plane
//! characters fall back to a sorted array.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::{self, BaseNode, Node};
use super::status::Status;

/// Number of directly indexed slots (the Basic Multilingual Plane).
const DIRECT_SLOTS: usize = 0x1_0000;

/// Child-array growth policy of the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootLayout {
    /// Fixed table indexed by code point, allocated on first insertion.
    #[default]
    Direct,

    /// Sorted array, grown one slot per new first character.
    Sorted,
}

#[derive(Clone)]
enum Slots<V> {
    Direct {
        table: Vec<Option<Box<Node<V>>>>,
        overflow: Vec<Node<V>>,
    },
    Sorted(Vec<Node<V>>),
}

/// The root of a BinTrie. Never a word itself.
#[derive(Clone)]
pub struct Root<V> {
    slots: Slots<V>,
}

impl<V> Root<V> {
    /// Creates an empty root with the given layout.
    pub fn new(layout: RootLayout) -> Self {
        let slots = match layout {
            RootLayout::Direct => Slots::Direct {
                table: Vec::new(),
                overflow: Vec::new(),
            },
            RootLayout::Sorted => Slots::Sorted(Vec::new()),
        };
        Self { slots }
    }

    pub fn layout(&self) -> RootLayout {
        match self.slots {
            Slots::Direct { .. } => RootLayout::Direct,
            Slots::Sorted(_) => RootLayout::Sorted,
        }
    }

    /// Number of distinct first characters.
    pub fn child_count(&self) -> usize {
        BaseNode::children(self).count()
    }

    /// Drops every child, keeping the layout.
    pub fn clear(&mut self) {
        *self = Self::new(self.layout());
    }
}

#[inline]
fn direct_index(c: char) -> Option<usize> {
    let code = c as usize;
    (code < DIRECT_SLOTS).then_some(code)
}

impl<V> BaseNode<V> for Root<V> {
    fn add_child(&mut self, node: Node<V>) -> bool {
        match &mut self.slots {
            Slots::Direct { table, overflow } => {
                let Some(index) = direct_index(node.c()) else {
                    return node::insert_child(overflow, node);
                };
                if let Some(existing) = table.get_mut(index).and_then(Option::as_mut) {
                    return existing.merge(node);
                }
                if node.status() == Status::Undefined {
                    return false;
                }
                if table.is_empty() {
                    table.resize_with(DIRECT_SLOTS, || None);
                }
                table[index] = Some(Box::new(node));
                true
            }
            Slots::Sorted(children) => node::insert_child(children, node),
        }
    }

    fn get_child(&self, c: char) -> Option<&Node<V>> {
        match &self.slots {
            Slots::Direct { table, overflow } => match direct_index(c) {
                Some(index) => table.get(index).and_then(|slot| slot.as_deref()),
                None => node::find_child(overflow, c),
            },
            Slots::Sorted(children) => node::find_child(children, c),
        }
    }

    fn get_child_mut(&mut self, c: char) -> Option<&mut Node<V>> {
        match &mut self.slots {
            Slots::Direct { table, overflow } => match direct_index(c) {
                Some(index) => table.get_mut(index).and_then(|slot| slot.as_deref_mut()),
                None => node::find_child_mut(overflow, c),
            },
            Slots::Sorted(children) => node::find_child_mut(children, c),
        }
    }

    fn pass_through_child(&mut self, c: char) -> &mut Node<V> {
        match &mut self.slots {
            Slots::Direct { table, overflow } => {
                let Some(index) = direct_index(c) else {
                    return node::pass_through_child(overflow, c);
                };
                if table.is_empty() {
                    table.resize_with(DIRECT_SLOTS, || None);
                }
                let slot = &mut table[index];
                if let Some(existing) = slot.as_mut() {
                    existing.merge(Node::pass_through(c));
                }
                &mut **slot.get_or_insert_with(|| Box::new(Node::pass_through(c)))
            }
            Slots::Sorted(children) => node::pass_through_child(children, c),
        }
    }

    fn children<'a>(&'a self) -> impl Iterator<Item = &'a Node<V>> + 'a
    where
        V: 'a,
    {
        let (table, rest): (&[Option<Box<Node<V>>>], &[Node<V>]) = match &self.slots {
            Slots::Direct { table, overflow } => (table.as_slice(), overflow.as_slice()),
            Slots::Sorted(children) => (&[], children.as_slice()),
        };
        table
            .iter()
            .filter_map(|slot| slot.as_deref())
            .chain(rest.iter())
    }

    fn status(&self) -> Status {
        Status::NotWord
    }

    fn value(&self) -> Option<&V> {
        None
    }

    fn shrink_to_fit(&mut self) {
        match &mut self.slots {
            Slots::Direct { table, overflow } => {
                for child in table.iter_mut().flatten() {
                    BaseNode::shrink_to_fit(child.as_mut());
                }
                overflow.shrink_to_fit();
                for child in overflow.iter_mut() {
                    BaseNode::shrink_to_fit(child);
                }
            }
            Slots::Sorted(children) => {
                children.shrink_to_fit();
                for child in children.iter_mut() {
                    BaseNode::shrink_to_fit(child);
                }
            }
        }
    }
}

impl<V> fmt::Debug for Root<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root")
            .field("layout", &self.layout())
            .field("children", &self.child_count())
            .finish()
    }
}
