//! Token types for text analysis.
//!
//! A [`Token`] is one maximal run of letters taken from a line of input,
//! already case-folded, together with the byte span it covers in that line.
//!
//! # Examples
//!
//! ```
//! use lexideck::analysis::token::Token;
//!
//! let token = Token::new("world", 6..11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.span, 6..11);
//! ```

use std::ops::Range;

/// A single word token extracted from a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Lowercase text
    pub text: String,

    /// Byte range of the source run within its line
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            span,
        }
    }
}

/// The tokens of one line, in order.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
