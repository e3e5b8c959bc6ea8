//! Command implementations for the LexiDeck CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DeckConfig;
use crate::error::Result;
use crate::pipeline::DeckPipeline;

/// Execute a CLI command.
pub fn execute_command(args: LexiDeckArgs) -> Result<()> {
    match &args.command {
        Command::Deck(deck_args) => render_deck(deck_args, &args),
        Command::Words(words_args) => list_words(words_args, &args),
    }
}

/// Resolve the configuration: defaults, then `--config`, then flags.
pub fn resolve_config(input: &InputArgs, cli_args: &LexiDeckArgs) -> Result<DeckConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DeckConfig::load_from_file(path)?
        }
        None => DeckConfig::default(),
    };
    input.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Render the deck to standard output or a file.
fn render_deck(args: &DeckArgs, cli_args: &LexiDeckArgs) -> Result<()> {
    let mut config = resolve_config(&args.input, cli_args)?;
    if let Some(notation) = args.notation {
        config.notation = notation;
    }

    let pipeline = DeckPipeline::from_config(config)?;

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            let summary = pipeline.run(&mut out)?;
            if cli_args.verbosity() > 0 {
                output_summary(&summary, cli_args.output_format, &mut io::stdout().lock())?;
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            pipeline.run(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// List ranked words with their counts.
fn list_words(args: &WordsArgs, cli_args: &LexiDeckArgs) -> Result<()> {
    let config = resolve_config(&args.input, cli_args)?;
    let pipeline = DeckPipeline::from_config(config)?;

    let (ranked, summary) = pipeline.ranked()?;
    let limit = args.limit.unwrap_or(ranked.len());
    let dictionary = pipeline.dictionary();

    let words = ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| WordRow::new(i + 1, entry, dictionary.get(&entry.word).len()))
        .collect();

    let result = WordListResult { words, summary };
    output_words(&result, cli_args.output_format, &mut io::stdout().lock())
}
