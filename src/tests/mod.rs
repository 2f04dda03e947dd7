//! Crate-level test suites.
//!
//! Component tests that live next to their code cover the trie itself; the
//! suites here exercise configuration, error reporting and dictionary loading
//! together with the filesystem and environment.
