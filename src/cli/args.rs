//! Command line argument parsing for the LexiDeck CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DeckConfig, LemmatizerKind};
use crate::deck::Notation;
use crate::ranker::SortMode;
use crate::vocabulary::IndexScope;

/// LexiDeck - build vocabulary study decks from plain-text corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "lexideck")]
#[command(about = "Extract dictionary vocabulary from text files and render a study deck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiDeckArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for reports and word lists
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// JSON configuration file; command line flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiDeckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the study deck
    Deck(DeckArgs),

    /// List the ranked vocabulary with counts
    Words(WordsArgs),
}

/// Corpus, dictionary and filtering options shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Corpus root directory (walked recursively)
    #[arg(long, value_name = "DIR")]
    pub corpus: Option<PathBuf>,

    /// Directory of tab-separated dictionary files
    #[arg(short, long, value_name = "DIR")]
    pub dictionary: Option<PathBuf>,

    /// Regular expression selecting corpus files by path
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Minimum canonical word length
    #[arg(short = 'm', long)]
    pub min_len: Option<usize>,

    /// Deck order
    #[arg(short, long)]
    pub sort: Option<SortMode>,

    /// Range of the first-seen index
    #[arg(long)]
    pub index_scope: Option<IndexScope>,

    /// Lemmatizer to use
    #[arg(short, long)]
    pub lemmatizer: Option<LemmatizerKind>,

    /// Lemma table (`lemma<TAB>form...`); implies `--lemmatizer lookup`
    #[arg(long, value_name = "FILE")]
    pub lemma_table: Option<PathBuf>,
}

impl InputArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut DeckConfig) {
        if let Some(corpus) = &self.corpus {
            config.corpus_dir = corpus.clone();
        }
        if let Some(dictionary) = &self.dictionary {
            config.dictionary_dir = dictionary.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.file_pattern = pattern.clone();
        }
        if let Some(min_len) = self.min_len {
            config.min_word_len = min_len;
        }
        if let Some(sort) = self.sort {
            config.sort_mode = sort;
        }
        if let Some(scope) = self.index_scope {
            config.index_scope = scope;
        }
        if let Some(table) = &self.lemma_table {
            config.lemma_table = Some(table.clone());
            config.lemmatizer = LemmatizerKind::Lookup;
        }
        if let Some(lemmatizer) = self.lemmatizer {
            config.lemmatizer = lemmatizer;
        }
    }
}

/// Arguments for rendering a deck
#[derive(Parser, Debug, Clone)]
pub struct DeckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Deck notation
    #[arg(short, long)]
    pub notation: Option<Notation>,

    /// Write the deck to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for listing words
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of words to list
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Output formats for CLI reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_deck_command() {
        let args = LexiDeckArgs::try_parse_from([
            "lexideck",
            "deck",
            "--corpus",
            "/books",
            "--dictionary",
            "/dict",
            "--min-len",
            "4",
            "--sort",
            "frequency",
            "--notation",
            "text",
            "--output",
            "deck.tsv",
        ])
        .unwrap();

        if let Command::Deck(deck_args) = args.command {
            assert_eq!(deck_args.input.corpus, Some(PathBuf::from("/books")));
            assert_eq!(deck_args.input.dictionary, Some(PathBuf::from("/dict")));
            assert_eq!(deck_args.input.min_len, Some(4));
            assert_eq!(deck_args.input.sort, Some(SortMode::Frequency));
            assert_eq!(deck_args.notation, Some(Notation::Text));
            assert_eq!(deck_args.output, Some(PathBuf::from("deck.tsv")));
        } else {
            panic!("Expected Deck command");
        }
    }

    #[test]
    fn test_words_command() {
        let args = LexiDeckArgs::try_parse_from([
            "lexideck",
            "--format",
            "json",
            "words",
            "--index-scope",
            "corpus",
            "--limit",
            "20",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Words(words_args) = args.command {
            assert_eq!(words_args.input.index_scope, Some(IndexScope::Corpus));
            assert_eq!(words_args.limit, Some(20));
        } else {
            panic!("Expected Words command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = LexiDeckArgs::try_parse_from(["lexideck", "deck"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = LexiDeckArgs::try_parse_from(["lexideck", "-vv", "deck"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = LexiDeckArgs::try_parse_from(["lexideck", "deck", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = DeckConfig::default();
        let input = InputArgs {
            pattern: Some(r"\.txt$".to_string()),
            min_len: Some(5),
            lemma_table: Some(PathBuf::from("lemmas.tsv")),
            ..InputArgs::default()
        };

        input.apply(&mut config);

        assert_eq!(config.file_pattern, r"\.txt$");
        assert_eq!(config.min_word_len, 5);
        assert_eq!(config.lemmatizer, LemmatizerKind::Lookup);
        assert_eq!(config.lemma_table, Some(PathBuf::from("lemmas.tsv")));
        assert_eq!(config.sort_mode, SortMode::Index);
    }

    #[test]
    fn test_explicit_lemmatizer_wins() {
        let mut config = DeckConfig::default();
        let input = InputArgs {
            lemmatizer: Some(LemmatizerKind::Identity),
            lemma_table: Some(PathBuf::from("lemmas.tsv")),
            ..InputArgs::default()
        };

        input.apply(&mut config);
        assert_eq!(config.lemmatizer, LemmatizerKind::Identity);
    }
}
