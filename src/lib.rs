//! Bintrie Library
//!
//! This library contains a sorted-array trie dictionary together with the
//! loading, configuration and error-handling layers around it. The library is
//! used by the `bintrie` binary, but can also be used as a dependency by
//! segmentation and matching engines.
//!
//! # Architecture
//!
//! - `data_structures::bintrie` holds the trie: nodes, the root, the child
//!   array search helper and the `BinTrie` container.
//! - `dictionary` turns line-oriented text dictionaries into tries.
//! - `config` and `error` provide the layered configuration and the error
//!   taxonomy shared by the library and the binary.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for bintrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
