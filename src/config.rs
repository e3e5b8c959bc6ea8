//! Pipeline configuration.
//!
//! Every setting the deck pipeline reads lives in [`DeckConfig`], which is
//! passed explicitly to [`crate::pipeline::DeckPipeline`]. A configuration
//! can be loaded from JSON; missing fields take their defaults.
//!
//! # Examples
//!
//! ```
//! use lexideck::config::DeckConfig;
//! use lexideck::deck::Notation;
//! use lexideck::ranker::SortMode;
//!
//! let config = DeckConfig::default();
//! assert_eq!(config.min_word_len, 3);
//! assert_eq!(config.sort_mode, SortMode::Index);
//! assert_eq!(config.notation, Notation::Html);
//!
//! let config: DeckConfig =
//!     serde_json::from_str(r#"{ "min_word_len": 4, "notation": "text" }"#).unwrap();
//! assert_eq!(config.min_word_len, 4);
//! assert_eq!(config.notation, Notation::Text);
//! assert_eq!(config.file_pattern, DeckConfig::default().file_pattern);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::corpus::compile_pattern;
use crate::deck::Notation;
use crate::error::{LexiDeckError, Result};
use crate::ranker::SortMode;
use crate::vocabulary::IndexScope;

/// Default corpus root.
pub const DEFAULT_CORPUS_DIR: &str = "./sample";

/// Default dictionary directory.
pub const DEFAULT_DICTIONARY_DIR: &str = "./dict/EJDict/src";

/// Default corpus file filter: `.txt` and `.md`, any case.
pub const DEFAULT_FILE_PATTERN: &str = r"(?i)\.(txt|md)$";

/// Default minimum canonical word length.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Configuration for one deck run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Root directory of the corpus, walked recursively.
    pub corpus_dir: PathBuf,
    /// Directory of tab-separated dictionary files.
    pub dictionary_dir: PathBuf,
    /// Regular expression matched against each corpus file path.
    pub file_pattern: String,
    /// Canonical words shorter than this many UTF-8 bytes are dropped.
    pub min_word_len: usize,
    /// Order of the deck.
    pub sort_mode: SortMode,
    /// Output notation.
    pub notation: Notation,
    /// Range of the discovery index.
    pub index_scope: IndexScope,
    /// How tokens are reduced to canonical words.
    pub lemmatizer: LemmatizerKind,
    /// Lemma table, required by [`LemmatizerKind::Lookup`].
    pub lemma_table: Option<PathBuf>,
}

/// Lemmatizer selection.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    /// Suffix rules checked against the dictionary headwords
    #[default]
    Suffix,
    /// Inflected-form table loaded from `lemma_table`
    Lookup,
    /// No reduction
    Identity,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            dictionary_dir: PathBuf::from(DEFAULT_DICTIONARY_DIR),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            min_word_len: DEFAULT_MIN_WORD_LEN,
            sort_mode: SortMode::default(),
            notation: Notation::default(),
            index_scope: IndexScope::default(),
            lemmatizer: LemmatizerKind::default(),
            lemma_table: None,
        }
    }
}

impl DeckConfig {
    /// Load a configuration from a JSON file.
    ///
    /// The result is not validated: command line flags may still complete
    /// it. Call [`DeckConfig::validate`] once all layers are applied.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexiDeckError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Compile the file pattern.
    pub fn file_regex(&self) -> Result<Regex> {
        compile_pattern(&self.file_pattern)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.file_regex()?;
        if self.lemmatizer == LemmatizerKind::Lookup && self.lemma_table.is_none() {
            return Err(LexiDeckError::config("lookup lemmatizer requires a lemma table"));
        }
        Ok(())
    }
}
