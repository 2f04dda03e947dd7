//! Text dictionary loading.
//!
//! Reads line-oriented dictionaries into a [`BinTrie<String>`]. Each line is
//! `word<separator>value`; a line without a separator maps the word to an
//! empty value. Blank lines and comment lines are ignored.
//!
//! # Example
//!
//! ```
//! use bintrie_lib::config::DictionaryConfig;
//! use bintrie_lib::dictionary::DictionaryLoader;
//!
//! let text = "# word\tnature\n商品\tn\n和服\tn\n服务\tvn\n";
//! let loader = DictionaryLoader::new(DictionaryConfig::default());
//! let trie = loader.load_reader(text.as_bytes()).unwrap();
//!
//! assert_eq!(trie.len(), 3);
//! assert_eq!(trie.get("服务").map(String::as_str), Some("vn"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DictionaryConfig;
use crate::data_structures::bintrie::{BinTrie, TrieConfig};
use crate::error::dictionary::{DictionaryError, DictionaryResult};

/// Counters collected while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, including blank and comment lines
    pub lines: usize,

    /// Words that were new to the trie
    pub inserted: usize,

    /// Words whose value replaced an earlier entry
    pub updated: usize,

    /// Malformed lines skipped
    pub skipped: usize,
}

/// Loads text dictionaries into tries.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader {
    config: DictionaryConfig,
    trie_config: TrieConfig,
}

impl DictionaryLoader {
    /// Creates a loader that builds tries with the default [`TrieConfig`].
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            config,
            trie_config: TrieConfig::default(),
        }
    }

    /// Sets the configuration of the tries this loader builds.
    pub fn with_trie_config(mut self, trie_config: TrieConfig) -> Self {
        self.trie_config = trie_config;
        self
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Loads the dictionary named by `DictionaryConfig::path`.
    pub fn load_configured(&self) -> DictionaryResult<BinTrie<String>> {
        let path = self.config.path.as_deref().ok_or(DictionaryError::NoPath)?;
        self.load_path(path)
    }

    /// Loads the dictionary file at `path`.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> DictionaryResult<BinTrie<String>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading dictionary");
        self.load_reader(BufReader::new(file))
    }

    /// Loads a dictionary from any buffered reader into a fresh trie.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> DictionaryResult<BinTrie<String>> {
        let mut trie = BinTrie::with_config(self.trie_config.clone());
        self.load_into(reader, &mut trie)?;
        if self.config.shrink_after_load {
            trie.shrink_to_fit();
        }
        Ok(trie)
    }

    /// Adds every entry of `reader` to an existing trie.
    ///
    /// Later lines overwrite earlier values for the same word.
    pub fn load_into<R: BufRead>(
        &self,
        reader: R,
        trie: &mut BinTrie<String>,
    ) -> DictionaryResult<LoadStats> {
        let mut stats = LoadStats::default();

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|source| DictionaryError::Read {
                line: number,
                source,
            })?;
            stats.lines += 1;

            let Some((word, value)) = self.split_line(&line) else {
                continue;
            };

            if word.is_empty() {
                if self.config.skip_malformed {
                    tracing::warn!(line = number, content = %line, "skipping malformed dictionary line");
                    stats.skipped += 1;
                    continue;
                }
                return Err(DictionaryError::MalformedLine {
                    line: number,
                    content: line,
                });
            }

            match trie.put(word, value.to_string()) {
                Ok(true) => stats.inserted += 1,
                Ok(false) => stats.updated += 1,
                Err(source) if self.config.skip_malformed => {
                    tracing::warn!(line = number, error = %source, "skipping invalid dictionary word");
                    stats.skipped += 1;
                }
                Err(source) => {
                    return Err(DictionaryError::InvalidWord {
                        line: number,
                        source,
                    })
                }
            }
        }

        tracing::info!(
            lines = stats.lines,
            inserted = stats.inserted,
            updated = stats.updated,
            skipped = stats.skipped,
            words = trie.len(),
            "dictionary loaded"
        );
        Ok(stats)
    }

    /// Splits a line into word and value, or `None` for blank and comment lines.
    fn split_line<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with(self.config.comment_prefix.as_str()) {
            return None;
        }
        match line.split_once(self.config.separator.as_str()) {
            Some((word, value)) => Some((word.trim(), value.trim())),
            None => Some((line.trim(), "")),
        }
    }
}
