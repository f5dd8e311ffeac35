//! Syllables command.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::syllables::estimate_syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

fn estimate_all(words: Vec<String>) -> Vec<WordSyllables> {
    words
        .into_iter()
        .map(|word| WordSyllables {
            syllables: estimate_syllables(&word),
            word,
        })
        .collect()
}

/// Print the syllable estimate for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing syllables command");

    let estimates = estimate_all(args.words);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
    } else {
        for estimate in &estimates {
            println!("{}: {}", estimate.word.dimmed(), estimate.syllables);
        }
    }
    Ok(())
}
