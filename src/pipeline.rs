//! End-to-end deck pipeline.
//!
//! ```text
//! corpus walk → tokenize → lemmatize / filter → aggregate → rank → render
//! ```
//!
//! The run is single-threaded and synchronous. The dictionary is loaded once
//! and shared read-only, through an [`Arc`], with every stage that needs it.

use std::io::Write;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::{
    IdentityLemmatizer, Lemmatizer, LookupLemmatizer, SuffixLemmatizer,
};
use crate::config::{DeckConfig, LemmatizerKind};
use crate::corpus::{CorpusWalker, read_lines};
use crate::deck::DeckRenderer;
use crate::dictionary::Dictionary;
use crate::error::{LexiDeckError, Result};
use crate::ranker::rank;
use crate::vocabulary::{VocabEntry, VocabMap, VocabularyAggregator};

/// Counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Corpus files read
    pub files_scanned: usize,
    /// Corpus files that could not be read
    pub files_skipped: usize,
    /// Tokens offered to the aggregator
    pub tokens_seen: usize,
    /// Distinct canonical words kept
    pub distinct_words: usize,
    /// Deck lines written
    pub lines_written: usize,
}

/// A configured pipeline, ready to run.
pub struct DeckPipeline {
    config: DeckConfig,
    dictionary: Arc<Dictionary>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for DeckPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckPipeline")
            .field("config", &self.config)
            .field("headwords", &self.dictionary.len())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl DeckPipeline {
    /// Create a pipeline from already-built collaborators.
    pub fn new(
        config: DeckConfig,
        dictionary: Arc<Dictionary>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        DeckPipeline {
            config,
            dictionary,
            lemmatizer,
        }
    }

    /// Validate `config`, load the dictionary and build the lemmatizer.
    pub fn from_config(config: DeckConfig) -> Result<Self> {
        config.validate()?;

        let dictionary = Arc::new(Dictionary::load_from_dir(&config.dictionary_dir)?);
        let lemmatizer = build_lemmatizer(&config, &dictionary)?;
        info!("Using {} lemmatizer", lemmatizer.name());

        Ok(Self::new(config, dictionary, lemmatizer))
    }

    /// Get the configuration.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Get the shared dictionary.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Walk the corpus and aggregate its vocabulary.
    pub fn aggregate(&self) -> Result<(VocabMap, DeckSummary)> {
        let walker = CorpusWalker::with_regex(&self.config.corpus_dir, self.config.file_regex()?);
        let files = walker.files()?;

        let mut summary = DeckSummary::default();
        let mut aggregator = VocabularyAggregator::new(
            self.lemmatizer.as_ref(),
            &self.dictionary,
            self.config.min_word_len,
        )
        .with_scope(self.config.index_scope);

        for path in &files {
            let lines = match read_lines(path) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            let before = aggregator.len();
            aggregator.begin_file();
            for line in &lines {
                aggregator.add_line(line);
            }
            summary.files_scanned += 1;
            debug!(
                "{}: {} lines, {} new words",
                path.display(),
                lines.len(),
                aggregator.len() - before
            );
        }

        summary.tokens_seen = aggregator.tokens_seen();
        let entries = aggregator.finish();
        summary.distinct_words = entries.len();

        info!(
            "Scanned {} files ({} skipped), {} tokens, {} distinct words",
            summary.files_scanned, summary.files_skipped, summary.tokens_seen, summary.distinct_words
        );

        Ok((entries, summary))
    }

    /// Aggregate and rank the corpus vocabulary.
    pub fn ranked(&self) -> Result<(Vec<VocabEntry>, DeckSummary)> {
        let (entries, summary) = self.aggregate()?;
        Ok((rank(entries, self.config.sort_mode), summary))
    }

    /// Run the whole pipeline, writing the deck to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<DeckSummary> {
        let (ranked, mut summary) = self.ranked()?;
        let renderer = DeckRenderer::new(self.config.notation);
        summary.lines_written = renderer.write(&ranked, &self.dictionary, out)?;

        info!("Wrote {} deck lines", summary.lines_written);
        Ok(summary)
    }
}

/// Build the lemmatizer selected by `config`.
pub fn build_lemmatizer(
    config: &DeckConfig,
    dictionary: &Arc<Dictionary>,
) -> Result<Box<dyn Lemmatizer>> {
    let lemmatizer: Box<dyn Lemmatizer> = match config.lemmatizer {
        LemmatizerKind::Suffix => Box::new(SuffixLemmatizer::new(Arc::clone(dictionary))),
        LemmatizerKind::Identity => Box::new(IdentityLemmatizer::new()),
        LemmatizerKind::Lookup => {
            let path = config.lemma_table.as_ref().ok_or_else(|| {
                LexiDeckError::config("lookup lemmatizer requires a lemma table")
            })?;
            Box::new(LookupLemmatizer::load_from_file(path)?)
        }
    };
    Ok(lemmatizer)
}
