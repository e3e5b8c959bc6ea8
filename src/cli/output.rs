//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::pipeline::DeckSummary;
use crate::vocabulary::VocabEntry;

/// One row of the `words` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRow {
    pub rank: usize,
    pub word: String,
    pub occurrences: usize,
    pub first_index: usize,
    pub definitions: usize,
}

impl WordRow {
    /// Build a row from a ranked entry.
    pub fn new(rank: usize, entry: &VocabEntry, definitions: usize) -> Self {
        WordRow {
            rank,
            word: entry.word.clone(),
            occurrences: entry.occurrences(),
            first_index: entry.first_index,
            definitions,
        }
    }
}

/// Result structure for the `words` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResult {
    pub words: Vec<WordRow>,
    pub summary: DeckSummary,
}

/// Write a word list in the requested format.
pub fn output_words<W: Write>(
    result: &WordListResult,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(result, out),
        OutputFormat::Human => {
            let width = result
                .words
                .iter()
                .map(|row| row.word.chars().count())
                .max()
                .unwrap_or(0)
                .max("Word".len());

            writeln!(out, "{:>5}  {:<width$}  {:>5}  {:>5}", "Rank", "Word", "Count", "First")?;
            writeln!(out, "{}", "─".repeat(5 + 2 + width + 2 + 5 + 2 + 5))?;
            for row in &result.words {
                writeln!(
                    out,
                    "{:>5}  {:<width$}  {:>5}  {:>5}",
                    row.rank, row.word, row.occurrences, row.first_index
                )?;
            }
            writeln!(out)?;
            output_summary_human(&result.summary, out)
        }
    }
}

/// Write a run summary in the requested format.
pub fn output_summary<W: Write>(
    summary: &DeckSummary,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(summary, out),
        OutputFormat::Human => output_summary_human(summary, out),
    }
}

fn output_summary_human<W: Write>(summary: &DeckSummary, out: &mut W) -> Result<()> {
    writeln!(out, "Files scanned: {}", summary.files_scanned)?;
    if summary.files_skipped > 0 {
        writeln!(out, "Files skipped: {}", summary.files_skipped)?;
    }
    writeln!(out, "Tokens: {}", summary.tokens_seen)?;
    writeln!(out, "Distinct words: {}", summary.distinct_words)?;
    if summary.lines_written > 0 {
        writeln!(out, "Deck lines: {}", summary.lines_written)?;
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
