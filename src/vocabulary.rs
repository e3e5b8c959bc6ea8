//! Vocabulary aggregation.
//!
//! The [`VocabularyAggregator`] consumes the lines of every corpus file in
//! traversal order, reduces each token to its canonical form, and keeps the
//! forms that are long enough and known to the dictionary. For each kept
//! form it records when it was first discovered and how many times it
//! repeated afterwards.
//!
//! # Counting
//!
//! [`VocabEntry::count`] counts *repetitions*: it is 0 when an entry is
//! created and grows by one on every later occurrence, so a word seen `k`
//! times ends with `count == k - 1`.
//!
//! # Discovery index
//!
//! With [`IndexScope::PerFile`] the discovery counter restarts at 0 for every
//! file, and [`VocabEntry::first_index`] holds the counter value at the
//! moment the word was first seen. With [`IndexScope::Corpus`] one counter
//! runs over the whole traversal. In both scopes
//! [`VocabEntry::discovery`] is a corpus-wide sequence number.
//!
//! # Examples
//!
//! ```
//! use lexideck::analysis::lemmatizer::LookupLemmatizer;
//! use lexideck::dictionary::Dictionary;
//! use lexideck::vocabulary::aggregate;
//!
//! let lemmatizer = LookupLemmatizer::from_pairs([("cats", "cat"), ("ran", "run")]);
//! let dictionary = Dictionary::from_entries([
//!     ("cat", vec!["a small domesticated feline"]),
//!     ("run", vec!["move fast", "operate"]),
//! ]);
//!
//! let files = vec![vec!["The cats ran quickly."]];
//! let entries = aggregate(files, 3, &lemmatizer, &dictionary);
//!
//! assert_eq!(entries["cat"].first_index, 0);
//! assert_eq!(entries["run"].first_index, 1);
//! assert_eq!(entries["run"].count, 0);
//! ```

use ahash::AHashMap;
use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::tokenizer::{AlphabeticTokenizer, Tokenizer};
use crate::dictionary::Dictionary;

/// Statistics for one canonical word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The canonical (lemmatized, lowercase) word
    pub word: String,
    /// Occurrences after the first one
    pub count: usize,
    /// Discovery index at first encounter, never reassigned
    pub first_index: usize,
    /// Corpus-wide discovery sequence number
    pub discovery: usize,
}

impl VocabEntry {
    /// Create an entry for a word seen for the first time.
    pub fn new<S: Into<String>>(word: S, first_index: usize, discovery: usize) -> Self {
        VocabEntry {
            word: word.into(),
            count: 0,
            first_index,
            discovery,
        }
    }

    /// Total number of occurrences (`count + 1`).
    pub fn occurrences(&self) -> usize {
        self.count + 1
    }
}

/// Aggregate mapping from canonical word to its entry.
pub type VocabMap = AHashMap<String, VocabEntry>;

/// Range over which the discovery index is counted.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexScope {
    /// Restart the index at 0 for every file
    #[default]
    PerFile,
    /// One index for the whole corpus
    Corpus,
}

/// Builds a [`VocabMap`] from a sequence of files, line by line.
pub struct VocabularyAggregator<'a> {
    tokenizer: AlphabeticTokenizer,
    lemmatizer: &'a dyn Lemmatizer,
    dictionary: &'a Dictionary,
    min_len: usize,
    scope: IndexScope,
    entries: VocabMap,
    local_index: usize,
    tokens_seen: usize,
}

impl<'a> VocabularyAggregator<'a> {
    /// Create an aggregator with the per-file index scope.
    pub fn new(lemmatizer: &'a dyn Lemmatizer, dictionary: &'a Dictionary, min_len: usize) -> Self {
        VocabularyAggregator {
            tokenizer: AlphabeticTokenizer::new(),
            lemmatizer,
            dictionary,
            min_len,
            scope: IndexScope::default(),
            entries: VocabMap::default(),
            local_index: 0,
            tokens_seen: 0,
        }
    }

    /// Set the discovery index scope.
    pub fn with_scope(mut self, scope: IndexScope) -> Self {
        self.scope = scope;
        self
    }

    /// Mark the start of a new file.
    pub fn begin_file(&mut self) {
        if self.scope == IndexScope::PerFile {
            self.local_index = 0;
        }
    }

    /// Tokenize one line and record its words.
    pub fn add_line(&mut self, line: &str) {
        for token in self.tokenizer.tokenize(line) {
            let known = self.entries.len();
            if self.add_token(&token.text) && self.entries.len() > known {
                trace!("Discovered {:?} at bytes {:?}", token.text, token.span);
            }
        }
    }

    /// Record one lowercase token. Returns whether it was kept.
    pub fn add_token(&mut self, token: &str) -> bool {
        self.tokens_seen += 1;

        let word = self.lemmatizer.lemma(token);
        if word.len() < self.min_len || !self.dictionary.contains(&word) {
            return false;
        }

        if let Some(entry) = self.entries.get_mut(&word) {
            entry.count += 1;
            return true;
        }

        let discovery = self.entries.len();
        self.entries
            .insert(word.clone(), VocabEntry::new(word, self.local_index, discovery));
        self.local_index += 1;
        true
    }

    /// Number of distinct words kept so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word has been kept yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens offered so far, kept or not.
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// Finish aggregation and return the mapping.
    pub fn finish(self) -> VocabMap {
        self.entries
    }
}

/// Aggregate the lines of `files` (each an iterable of lines) in order.
pub fn aggregate<F, L, S>(
    files: F,
    min_len: usize,
    lemmatizer: &dyn Lemmatizer,
    dictionary: &Dictionary,
) -> VocabMap
where
    F: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = VocabularyAggregator::new(lemmatizer, dictionary, min_len);
    for lines in files {
        aggregator.begin_file();
        for line in lines {
            aggregator.add_line(line.as_ref());
        }
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lemmatizer::{IdentityLemmatizer, LookupLemmatizer};

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_entries(words.iter().map(|w| (w.to_string(), vec!["def"])))
    }

    #[test]
    fn test_end_to_end_line() {
        let lemmatizer = LookupLemmatizer::from_pairs([("cats", "cat"), ("ran", "run")]);
        let dictionary = dictionary(&["cat", "run"]);

        let entries = aggregate(
            vec![vec!["The cats ran quickly."]],
            3,
            &lemmatizer,
            &dictionary,
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries["cat"], VocabEntry::new("cat", 0, 0));
        assert_eq!(entries["run"], VocabEntry::new("run", 1, 1));
    }

    #[test]
    fn test_count_is_repetitions() {
        let dictionary = dictionary(&["apple"]);
        let entries = aggregate(
            vec![vec!["apple Apple", "APPLE"]],
            3,
            &IdentityLemmatizer::new(),
            &dictionary,
        );

        assert_eq!(entries["apple"].count, 2);
        assert_eq!(entries["apple"].occurrences(), 3);
    }

    #[test]
    fn test_canonical_forms_merge() {
        let lemmatizer = LookupLemmatizer::from_pairs([("runs", "run"), ("running", "run")]);
        let dictionary = dictionary(&["run"]);

        let entries = aggregate(
            vec![vec!["run runs running"]],
            3,
            &lemmatizer,
            &dictionary,
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries["run"].count, 2);
    }

    #[test]
    fn test_min_len_and_membership_filter() {
        let dictionary = dictionary(&["ox", "oxen", "cat"]);
        let entries = aggregate(
            vec![vec!["ox ox ox oxen dog dog cat"]],
            3,
            &IdentityLemmatizer::new(),
            &dictionary,
        );

        assert!(!entries.contains_key("ox"));
        assert!(!entries.contains_key("dog"));
        assert!(entries.contains_key("oxen"));
        assert!(entries.contains_key("cat"));
    }

    #[test]
    fn test_min_len_counts_bytes() {
        // "été" is three characters but five UTF-8 bytes.
        let dictionary = dictionary(&["été", "sé"]);
        let entries = aggregate(
            vec![vec!["été sé"]],
            4,
            &IdentityLemmatizer::new(),
            &dictionary,
        );

        assert!(entries.contains_key("été"));
        assert!(!entries.contains_key("sé"));
    }

    #[test]
    fn test_first_index_monotonic_within_file() {
        let dictionary = dictionary(&["alpha", "beta", "gamma"]);
        let entries = aggregate(
            vec![vec!["gamma alpha", "gamma beta alpha"]],
            3,
            &IdentityLemmatizer::new(),
            &dictionary,
        );

        assert_eq!(entries["gamma"].first_index, 0);
        assert_eq!(entries["alpha"].first_index, 1);
        assert_eq!(entries["beta"].first_index, 2);
    }

    #[test]
    fn test_per_file_index_restarts() {
        let dictionary = dictionary(&["alpha", "beta", "gamma"]);
        let entries = aggregate(
            vec![vec!["alpha beta"], vec!["beta gamma"]],
            3,
            &IdentityLemmatizer::new(),
            &dictionary,
        );

        assert_eq!(entries["alpha"].first_index, 0);
        assert_eq!(entries["beta"].first_index, 1);
        // Discovered in the second file, whose counter restarted.
        assert_eq!(entries["gamma"].first_index, 0);
        assert_eq!(entries["gamma"].discovery, 2);
        // Later files never reassign the index.
        assert_eq!(entries["beta"].count, 1);
    }

    #[test]
    fn test_corpus_index_scope() {
        let lemmatizer = IdentityLemmatizer::new();
        let dictionary = dictionary(&["alpha", "beta", "gamma"]);
        let mut aggregator =
            VocabularyAggregator::new(&lemmatizer, &dictionary, 3).with_scope(IndexScope::Corpus);

        aggregator.begin_file();
        aggregator.add_line("alpha beta");
        aggregator.begin_file();
        aggregator.add_line("gamma");

        assert_eq!(aggregator.tokens_seen(), 3);
        let entries = aggregator.finish();
        assert_eq!(entries["gamma"].first_index, 2);
    }

    #[test]
    fn test_add_token_reports_kept() {
        let lemmatizer = IdentityLemmatizer::new();
        let dictionary = dictionary(&["cat"]);
        let mut aggregator = VocabularyAggregator::new(&lemmatizer, &dictionary, 3);

        assert!(aggregator.add_token("cat"));
        assert!(!aggregator.add_token("dog"));
        assert_eq!(aggregator.len(), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let dictionary = dictionary(&["cat"]);
        let files: Vec<Vec<&str>> = Vec::new();
        let entries = aggregate(files, 3, &IdentityLemmatizer::new(), &dictionary);
        assert!(entries.is_empty());
    }
}
