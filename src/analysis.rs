//! Text analysis for LexiDeck.
//!
//! This module turns raw lines into canonical words: tokenizers split text
//! into lowercase word tokens, and lemmatizers reduce each token to the
//! base form used as a dictionary headword.

pub mod lemmatizer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use lemmatizer::Lemmatizer;
pub use token::*;
pub use tokenizer::*;
