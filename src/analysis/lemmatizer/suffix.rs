//! Suffix-rule lemmatizer.
//!
//! Undoes regular English inflection (plurals, past tense, participles,
//! comparatives) and accepts a candidate only when it is a headword of the
//! dictionary. Words that are themselves headwords, or for which no rule
//! yields a headword, are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexideck::analysis::lemmatizer::{Lemmatizer, SuffixLemmatizer};
//! use lexideck::dictionary::Dictionary;
//!
//! let dictionary = Arc::new(Dictionary::from_entries([
//!     ("cat", vec!["a small domesticated feline"]),
//!     ("run", vec!["move fast"]),
//! ]));
//! let lemmatizer = SuffixLemmatizer::new(dictionary);
//!
//! assert_eq!(lemmatizer.lemma("cats"), "cat");
//! assert_eq!(lemmatizer.lemma("running"), "run");
//! assert_eq!(lemmatizer.lemma("ran"), "ran");
//! ```

use std::sync::Arc;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::dictionary::Dictionary;

/// Rules as (suffix, replacement), tried in order.
const RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ves", "f"),
    ("ves", "fe"),
    ("es", ""),
    ("s", ""),
    ("ied", "y"),
    ("ed", ""),
    ("ed", "e"),
    ("ing", ""),
    ("ing", "e"),
    ("ier", "y"),
    ("iest", "y"),
    ("er", ""),
    ("er", "e"),
    ("est", ""),
    ("est", "e"),
];

/// Suffixes whose stem may carry a doubled final consonant ("running").
const DOUBLING_SUFFIXES: &[&str] = &["ed", "ing", "er", "est"];

/// Lemmatizer that strips inflectional suffixes, gated by known headwords.
#[derive(Debug, Clone)]
pub struct SuffixLemmatizer {
    headwords: Arc<Dictionary>,
}

impl SuffixLemmatizer {
    /// Create a suffix lemmatizer over the dictionary's headwords.
    pub fn new(headwords: Arc<Dictionary>) -> Self {
        SuffixLemmatizer { headwords }
    }

    /// Candidate base forms for `word`, most specific first.
    fn candidates(word: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for (suffix, replacement) in RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() || (*suffix == "s" && stem.ends_with('s')) {
                continue;
            }
            candidates.push(format!("{stem}{replacement}"));

            if replacement.is_empty()
                && DOUBLING_SUFFIXES.contains(suffix)
                && let Some(single) = undouble(stem)
            {
                candidates.push(single.to_string());
            }
        }

        candidates
    }
}

/// Drop one of two identical trailing consonants ("runn" -> "run").
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemma(&self, word: &str) -> String {
        if self.headwords.contains(word) {
            return word.to_string();
        }

        Self::candidates(word)
            .into_iter()
            .find(|candidate| self.headwords.contains(candidate))
            .unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer(words: &[&str]) -> SuffixLemmatizer {
        let dictionary =
            Dictionary::from_entries(words.iter().map(|w| (w.to_string(), vec!["def"])));
        SuffixLemmatizer::new(Arc::new(dictionary))
    }

    #[test]
    fn test_plurals() {
        let lemmatizer = lemmatizer(&["cat", "box", "city", "wolf", "knife"]);

        assert_eq!(lemmatizer.lemma("cats"), "cat");
        assert_eq!(lemmatizer.lemma("boxes"), "box");
        assert_eq!(lemmatizer.lemma("cities"), "city");
        assert_eq!(lemmatizer.lemma("wolves"), "wolf");
        assert_eq!(lemmatizer.lemma("knives"), "knife");
    }

    #[test]
    fn test_verb_forms() {
        let lemmatizer = lemmatizer(&["walk", "like", "stop", "run", "make", "carry"]);

        assert_eq!(lemmatizer.lemma("walked"), "walk");
        assert_eq!(lemmatizer.lemma("liked"), "like");
        assert_eq!(lemmatizer.lemma("stopped"), "stop");
        assert_eq!(lemmatizer.lemma("running"), "run");
        assert_eq!(lemmatizer.lemma("making"), "make");
        assert_eq!(lemmatizer.lemma("carried"), "carry");
    }

    #[test]
    fn test_comparatives() {
        let lemmatizer = lemmatizer(&["big", "happy", "fast"]);

        assert_eq!(lemmatizer.lemma("bigger"), "big");
        assert_eq!(lemmatizer.lemma("happiest"), "happy");
        assert_eq!(lemmatizer.lemma("faster"), "fast");
    }

    #[test]
    fn test_headword_is_kept() {
        let lemmatizer = lemmatizer(&["news", "new", "glass"]);

        assert_eq!(lemmatizer.lemma("news"), "news");
        assert_eq!(lemmatizer.lemma("glass"), "glass");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        let lemmatizer = lemmatizer(&["cat"]);

        assert_eq!(lemmatizer.lemma("ran"), "ran");
        assert_eq!(lemmatizer.lemma("s"), "s");
        assert_eq!(lemmatizer.lemma("quickly"), "quickly");
    }

    #[test]
    fn test_undouble() {
        assert_eq!(undouble("runn"), Some("run"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("walk"), None);
        assert_eq!(undouble("x"), None);
    }
}
