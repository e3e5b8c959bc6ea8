//! Lemmatizers that reduce word tokens to their dictionary base form.
//!
//! The aggregation stage only relies on the [`Lemmatizer`] contract: given a
//! lowercase token, return its canonical form. The implementations here are
//! interchangeable:
//!
//! - [`IdentityLemmatizer`] - returns words unchanged
//! - [`LookupLemmatizer`] - inflected-form table loaded from a TSV file
//! - [`SuffixLemmatizer`] - English inflection rules checked against the
//!   dictionary's headwords

/// Trait for lemmatization algorithms.
///
/// Implementations must be deterministic and free of side effects.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a lowercase word to its canonical base form.
    fn lemma(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod lookup;
pub mod suffix;

pub use identity::IdentityLemmatizer;
pub use lookup::LookupLemmatizer;
pub use suffix::SuffixLemmatizer;
