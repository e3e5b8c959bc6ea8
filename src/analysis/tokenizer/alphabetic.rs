//! Alphabetic-run tokenizer.
//!
//! Splits a line into maximal runs of cased letters. A character belongs to
//! a word when its Unicode general category is `Ll` (lowercase letter) or
//! `Lu` (uppercase letter). Digits, punctuation, whitespace, typographic
//! quotation marks, modifier letters (`ʰ`), ordinal indicators (`ª`) and
//! letter-like numbers (`Ⅰ`) all separate words.
//!
//! # Examples
//!
//! ```
//! use lexideck::analysis::tokenizer::tokenize;
//!
//! assert_eq!(tokenize("aa b"), vec!["aa", "b"]);
//! assert_eq!(tokenize("\"a\"b"), vec!["a", "b"]);
//! assert_eq!(tokenize("s \u{201c}abc\u{201d}"), vec!["s", "abc"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// Maximal runs of lowercase or uppercase letters, by general category.
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Ll}\p{Lu}]+").expect("word run pattern should be valid"));

/// A tokenizer that emits lowercase runs of alphabetic characters.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticTokenizer;

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Self {
        AlphabeticTokenizer
    }

    /// Whether `c` is part of a word.
    pub fn is_word_char(c: char) -> bool {
        WORD_RUN.is_match(c.encode_utf8(&mut [0; 4]))
    }

    /// Scan `text` and collect its tokens with their byte spans.
    pub fn scan(&self, text: &str) -> Vec<Token> {
        WORD_RUN
            .find_iter(text)
            .map(|run| Token::new(run.as_str().to_lowercase(), run.range()))
            .collect()
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        Box::new(self.scan(text).into_iter())
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

/// Split a line into lowercase word strings.
pub fn tokenize(line: &str) -> Vec<String> {
    AlphabeticTokenizer::new()
        .scan(line)
        .into_iter()
        .map(|token| token.text)
        .collect()
}
