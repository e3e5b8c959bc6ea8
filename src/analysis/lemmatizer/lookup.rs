//! Table-driven lemmatizer.
//!
//! Maps inflected forms to their lemma using an explicit table, the way
//! lookup lemmatizers built from morphological word lists work. Words that
//! are not in the table are returned unchanged.
//!
//! The on-disk format is one lemma per line followed by its inflected
//! forms, all tab-separated:
//!
//! ```text
//! run	runs	ran	running
//! cat	cats
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::error::{LexiDeckError, Result};

/// Lemmatizer backed by a form -> lemma table.
#[derive(Debug, Clone, Default)]
pub struct LookupLemmatizer {
    forms: AHashMap<String, String>,
}

impl LookupLemmatizer {
    /// Create an empty lookup lemmatizer.
    pub fn new() -> Self {
        LookupLemmatizer {
            forms: AHashMap::new(),
        }
    }

    /// Build a lemmatizer from `(form, lemma)` pairs.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        let mut lemmatizer = LookupLemmatizer::new();
        for (form, lemma) in pairs {
            lemmatizer.add_form(form, lemma);
        }
        lemmatizer
    }

    /// Register `form` as an inflection of `lemma`.
    ///
    /// Forms are stored lowercase; a later registration of the same form
    /// replaces the earlier one.
    pub fn add_form<F: Into<String>, L: Into<String>>(&mut self, form: F, lemma: L) {
        let form = form.into().to_lowercase();
        let lemma = lemma.into().to_lowercase();
        self.forms.insert(form, lemma);
    }

    /// Load a table from a tab-separated file (`lemma<TAB>form...`).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexiDeckError::lemmatizer(format!(
                "Failed to read lemma table '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut lemmatizer = LookupLemmatizer::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let mut fields = line.split('\t').map(str::trim);
            let Some(lemma) = fields.next().filter(|s| !s.is_empty()) else {
                continue;
            };

            let mut added = 0;
            for form in fields.filter(|s| !s.is_empty()) {
                lemmatizer.add_form(form, lemma);
                added += 1;
            }
            if added == 0 {
                debug!(
                    "{}:{}: lemma '{}' has no forms",
                    path.display(),
                    line_num + 1,
                    lemma
                );
            }
        }

        Ok(lemmatizer)
    }

    /// Get the number of known forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Lemmatizer for LookupLemmatizer {
    fn lemma(&self, word: &str) -> String {
        match self.forms.get(word) {
            Some(lemma) => lemma.clone(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}
