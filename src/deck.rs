//! Deck rendering.
//!
//! Turns ranked vocabulary into one output line per word, pairing the word
//! with its dictionary definitions. Entries whose lookup yields no
//! definitions produce no line. Lines are emitted in input order.
//!
//! # Notations
//!
//! - [`Notation::Text`]: `word<TAB>definition` for a single definition,
//!   `word<TAB> 1. first 2. second` for several.
//! - [`Notation::Html`]: `word<TAB>first<br><br>second<br><br>third`.
//!
//! # Examples
//!
//! ```
//! use lexideck::deck::{Notation, render};
//! use lexideck::dictionary::Dictionary;
//! use lexideck::vocabulary::VocabEntry;
//!
//! let dictionary = Dictionary::from_entries([
//!     ("cat", vec!["a small domesticated feline"]),
//!     ("run", vec!["move fast", "operate"]),
//! ]);
//! let ranked = vec![VocabEntry::new("cat", 0, 0), VocabEntry::new("run", 1, 1)];
//!
//! let lines = render(&ranked, &dictionary, Notation::Text);
//! assert_eq!(lines[0], "cat\ta small domesticated feline");
//! assert_eq!(lines[1], "run\t 1. move fast 2. operate");
//! ```

use std::fmt::Write as _;
use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::vocabulary::VocabEntry;

const WORD_SEPARATOR: &str = "\t";
const HTML_BREAK: &str = "<br><br>";

/// Output notation of a deck.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Plain text with numbered definitions
    Text,
    /// Definitions joined with HTML line breaks
    #[default]
    Html,
}

/// Formats deck lines in one notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckRenderer {
    notation: Notation,
}

impl DeckRenderer {
    /// Create a renderer for `notation`.
    pub fn new(notation: Notation) -> Self {
        DeckRenderer { notation }
    }

    /// Get the notation.
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Format one word, or `None` when it has no definitions.
    pub fn render_entry(&self, word: &str, definitions: &[String]) -> Option<String> {
        let (first, rest) = definitions.split_first()?;
        let mut line = format!("{word}{WORD_SEPARATOR}");

        match self.notation {
            Notation::Text if rest.is_empty() => line.push_str(first),
            Notation::Text => {
                for (i, definition) in definitions.iter().enumerate() {
                    // Writing into a String cannot fail.
                    let _ = write!(line, " {}. {}", i + 1, definition);
                }
            }
            Notation::Html => {
                line.push_str(first);
                for definition in rest {
                    line.push_str(HTML_BREAK);
                    line.push_str(definition);
                }
            }
        }

        Some(line)
    }

    /// Render every entry that has at least one definition.
    pub fn render(&self, ranked: &[VocabEntry], dictionary: &Dictionary) -> Vec<String> {
        ranked
            .iter()
            .filter_map(|entry| self.render_entry(&entry.word, dictionary.get(&entry.word)))
            .collect()
    }

    /// Write the deck to `out`, one line per record. Returns lines written.
    pub fn write<W: Write>(
        &self,
        ranked: &[VocabEntry],
        dictionary: &Dictionary,
        out: &mut W,
    ) -> Result<usize> {
        let mut written = 0;
        for entry in ranked {
            if let Some(line) = self.render_entry(&entry.word, dictionary.get(&entry.word)) {
                writeln!(out, "{line}")?;
                written += 1;
            }
        }
        out.flush()?;
        Ok(written)
    }
}

/// Render `ranked` in `notation`.
pub fn render(ranked: &[VocabEntry], dictionary: &Dictionary, notation: Notation) -> Vec<String> {
    DeckRenderer::new(notation).render(ranked, dictionary)
}

/// Write `ranked` in `notation` to `out`. Returns lines written.
pub fn write_deck<W: Write>(
    ranked: &[VocabEntry],
    dictionary: &Dictionary,
    notation: Notation,
    out: &mut W,
) -> Result<usize> {
    DeckRenderer::new(notation).write(ranked, dictionary, out)
}
