//! Bintrie - command line entrypoint.
//!
//! Loads a text dictionary into a trie and answers lookups, prefix queries
//! and segmentation requests, printing JSON to stdout. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bintrie_lib::config::{BintrieConfig, ConfigLoader, LogConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX};
use bintrie_lib::data_structures::{BinTrie, Hit};
use bintrie_lib::dictionary::DictionaryLoader;
use bintrie_lib::error::config::ConfigError;
use bintrie_lib::error::{
    report_error, set_error_reporter, BintrieError, ErrorContext, TracingErrorReporter,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for bintrie.
#[derive(Parser, Debug)]
#[clap(name = "bintrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding `dictionary.path` from the configuration
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Query(Query),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Subcommands answered from a loaded dictionary.
#[derive(Subcommand, Debug)]
enum Query {
    /// Look up the value of one or more words
    Lookup {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// List the words that start with a prefix
    Prefix {
        /// Prefix to search for
        prefix: String,
    },

    /// Segment text against the dictionary
    Segment {
        /// Text to segment
        text: String,

        /// Report every (possibly overlapping) hit instead of the longest matches
        #[clap(long)]
        all: bool,
    },
}

#[derive(Serialize)]
struct Entry<'a> {
    word: String,
    value: Option<&'a str>,
}

#[derive(Serialize)]
struct Token<'a> {
    word: String,
    begin: usize,
    end: usize,
    value: &'a str,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    installed.map_err(|e| {
        BintrieError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })?;
    Ok(())
}

fn load_dictionary(config: &BintrieConfig, path: Option<&Path>) -> Result<BinTrie<String>> {
    let loader = DictionaryLoader::new(config.dictionary.clone()).with_trie_config(config.trie.clone());
    let loaded = match path {
        Some(path) => loader.load_path(path),
        None => loader.load_configured(),
    };

    match loaded {
        Ok(trie) => Ok(trie),
        Err(e) => {
            let message = e.to_string();
            let source = path
                .or(config.dictionary.path.as_deref())
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".to_string());
            report_error(
                ErrorContext::new(BintrieError::from(e), "dictionary")
                    .with_details(format!("source: {source}")),
            );
            bail!("Failed to load dictionary: {message}")
        }
    }
}

fn tokens<'a>(text: &str, hits: Vec<Hit<'a, String>>) -> Vec<Token<'a>> {
    let chars: Vec<char> = text.chars().collect();
    hits.into_iter()
        .map(|hit| Token {
            word: chars[hit.begin..hit.end].iter().collect(),
            begin: hit.begin,
            end: hit.end,
            value: hit.value.as_str(),
        })
        .collect()
}

fn run_query(trie: &BinTrie<String>, query: Query) -> Result<()> {
    let output = match query {
        Query::Lookup { words } => {
            let entries: Vec<Entry<'_>> = words
                .into_iter()
                .map(|word| {
                    let value = trie.get(&word).map(String::as_str);
                    Entry { word, value }
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
        Query::Prefix { prefix } => {
            let entries: Vec<Entry<'_>> = trie
                .prefix_search(&prefix)
                .map(|(word, value)| Entry {
                    word,
                    value: Some(value.as_str()),
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
        Query::Segment { text, all } => {
            let hits = if all {
                trie.parse(&text)
            } else {
                trie.parse_longest(&text)
            };
            serde_json::to_string_pretty(&tokens(&text, hits))?
        }
    };
    println!("{output}");
    Ok(())
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    });
    let loaded = ConfigLoader::new(config_path.as_deref(), ENV_PREFIX).load();

    // Logging comes up before configuration errors are surfaced so that they are logged too
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Validate => {
            info!("Validating configuration");
            loaded.context("Configuration validation failed")?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(BintrieError::Io)?;
            }

            let toml = toml::to_string_pretty(&BintrieConfig::default())
                .map_err(|e| ConfigError::SerializeError(e.to_string()))
                .map_err(BintrieError::Config)?;
            std::fs::write(&output, toml).map_err(BintrieError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Query(query) => {
            let config = loaded.context("Failed to load configuration")?;
            let trie = load_dictionary(&config, args.dictionary.as_deref())?;
            info!(words = trie.len(), "dictionary ready");
            run_query(&trie, query)
        }
    }
}
