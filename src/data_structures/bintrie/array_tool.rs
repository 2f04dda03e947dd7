// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary search over a sorted child array.
//!
//! Both entry points return `Ok(index)` on an exact key match and
//! `Err(insertion_point)` on a miss, where inserting at `insertion_point`
//! keeps the array sorted. One search therefore answers both "is it there"
//! and "where does it go".
//!
//! The child array must be sorted ascending by character with unique keys.

use super::node::Node;

/// Searches `children` for the node keyed by `c`.
#[inline]
pub fn search_by_char<V>(children: &[Node<V>], c: char) -> Result<usize, usize> {
    children.binary_search_by(|probe| probe.c().cmp(&c))
}

/// Searches `children` for a node with the same key as `node`.
#[inline]
pub fn search_by_node<V>(children: &[Node<V>], node: &Node<V>) -> Result<usize, usize> {
    search_by_char(children, node.c())
}

/// Folds a search result into a single signed index.
///
/// Non-negative values are match indices; a negative value `r` encodes the
/// insertion point `-(r + 1)`. Persistence formats that store search results
/// as plain integers use this encoding.
#[inline]
pub fn to_signed(result: Result<usize, usize>) -> isize {
    match result {
        Ok(index) => index as isize,
        Err(insert) => -(insert as isize) - 1,
    }
}

/// Inverse of [`to_signed`].
#[inline]
pub fn from_signed(encoded: isize) -> Result<usize, usize> {
    if encoded >= 0 {
        Ok(encoded as usize)
    } else {
        Err((-(encoded + 1)) as usize)
    }
}
