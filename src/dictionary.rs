//! Bilingual glossary used to gate and define vocabulary.
//!
//! A [`Dictionary`] maps a headword to an ordered list of definitions. It is
//! built once at start-up and then only read: the aggregation stage asks
//! [`Dictionary::contains`] and the deck renderer asks [`Dictionary::get`].
//!
//! # Source format
//!
//! The store is loaded from a directory of tab-separated files. Each line is
//! `headword<TAB>definition`; repeated headwords accumulate their definitions
//! in the order they are read. Files are read in file-name order.
//!
//! # Examples
//!
//! ```
//! use lexideck::dictionary::Dictionary;
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.insert("run", "move fast");
//! dictionary.insert("run", "operate");
//!
//! assert!(dictionary.contains("run"));
//! assert_eq!(dictionary.get("run"), ["move fast", "operate"]);
//! assert!(dictionary.get("walk").is_empty());
//! ```

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use log::{debug, info};

use crate::error::{LexiDeckError, Result};

const FIELD_SEPARATOR: char = '\t';

/// Headword -> definitions lookup.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Definitions per headword, in source order
    entries: AHashMap<String, Vec<String>>,
    /// Total number of definitions across all headwords
    definition_count: usize,
}

/// Statistics gathered while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Files read
    pub files: usize,
    /// Lines turned into definitions
    pub definitions: usize,
    /// Non-blank lines without a separator
    pub malformed_lines: usize,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: AHashMap::new(),
            definition_count: 0,
        }
    }

    /// Build a dictionary from headword/definitions pairs.
    ///
    /// An empty definition list is kept as a present-but-empty entry.
    pub fn from_entries<I, W, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<D>)>,
        W: Into<String>,
        D: Into<String>,
    {
        let mut dictionary = Dictionary::new();
        for (word, definitions) in entries {
            let list = dictionary.entries.entry(word.into()).or_default();
            for definition in definitions {
                list.push(definition.into());
                dictionary.definition_count += 1;
            }
        }
        dictionary
    }

    /// Append a definition to a headword's list.
    pub fn insert<W: Into<String>, D: Into<String>>(&mut self, word: W, definition: D) {
        self.entries
            .entry(word.into())
            .or_default()
            .push(definition.into());
        self.definition_count += 1;
    }

    /// Get the definitions of `word`, in source order.
    ///
    /// Returns an empty slice for unknown words.
    pub fn get(&self, word: &str) -> &[String] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check whether `word` is a headword.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no headwords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of definitions.
    pub fn definition_count(&self) -> usize {
        self.definition_count
    }

    /// Iterate over all headwords in arbitrary order.
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Load every file in `dir` (subdirectories are ignored).
    ///
    /// Any unreadable file aborts the load: membership filtering is only
    /// meaningful against the complete glossary.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let read_dir = fs::read_dir(dir).map_err(|e| {
            LexiDeckError::dictionary(format!(
                "Failed to read dictionary directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in read_dir {
            let path = entry?.path();
            if !path.is_dir() {
                files.push(path);
            }
        }
        files.sort();

        let mut dictionary = Dictionary::new();
        let mut stats = LoadStats::default();

        for path in &files {
            let file = File::open(path).map_err(|e| {
                LexiDeckError::dictionary(format!(
                    "Failed to open dictionary file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let file_stats = dictionary.load_from_reader(BufReader::new(file), path)?;
            stats.definitions += file_stats.definitions;
            stats.malformed_lines += file_stats.malformed_lines;
            stats.files += 1;
        }

        info!(
            "Loaded dictionary from {}: {} headwords, {} definitions, {} files",
            dir.display(),
            dictionary.len(),
            stats.definitions,
            stats.files
        );
        if stats.malformed_lines > 0 {
            debug!("Skipped {} malformed dictionary lines", stats.malformed_lines);
        }

        Ok(dictionary)
    }

    /// Read `headword<TAB>definition` lines from `reader` into this store.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD. `source` only labels log and
    /// error messages.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R, source: &Path) -> Result<LoadStats> {
        let mut stats = LoadStats::default();

        for (line_num, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|e| {
                LexiDeckError::dictionary(format!(
                    "Failed to read dictionary file '{}': {}",
                    source.display(),
                    e
                ))
            })?;
            let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
            let line = String::from_utf8_lossy(raw);
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(FIELD_SEPARATOR);
            let headword = fields.next().unwrap_or_default();
            match fields.next() {
                Some(definition) => {
                    self.insert(headword, definition);
                    stats.definitions += 1;
                }
                None => {
                    debug!(
                        "{}:{}: no separator, line skipped",
                        source.display(),
                        line_num + 1
                    );
                    stats.malformed_lines += 1;
                }
            }
        }

        Ok(stats)
    }
}
