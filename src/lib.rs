//! # LexiDeck
//!
//! Extracts the vocabulary of interest from a corpus of plain-text files and
//! renders it as a study deck.
//!
//! ## Pipeline
//!
//! - Tokenize each line into lowercase alphabetic words
//! - Reduce every word to its canonical form with a [`analysis::lemmatizer::Lemmatizer`]
//! - Keep forms that are long enough and present in the [`dictionary::Dictionary`]
//! - Record first-seen order and repetition count per form
//! - Sort by first appearance or by frequency
//! - Render `word<TAB>definitions` lines in plain-text or HTML notation

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod deck;
pub mod dictionary;
pub mod error;
pub mod pipeline;
pub mod ranker;
pub mod vocabulary;

pub mod prelude {
    pub use crate::config::DeckConfig;
    pub use crate::deck::Notation;
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{LexiDeckError, Result};
    pub use crate::pipeline::{DeckPipeline, DeckSummary};
    pub use crate::ranker::SortMode;
    pub use crate::vocabulary::{IndexScope, VocabEntry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
