//! Tokenizers for breaking lines of text into word tokens.
//!
//! The only tokenizer the deck pipeline needs is
//! [`alphabetic::AlphabeticTokenizer`], which emits one lowercase token per
//! maximal run of alphabetic characters.
//!
//! # Examples
//!
//! ```
//! use lexideck::analysis::tokenizer::Tokenizer;
//! use lexideck::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert a line of text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared across
/// pipeline stages.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;

pub use alphabetic::{AlphabeticTokenizer, tokenize};
