//! Stats command: raw corpus counts behind the scores.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::CorpusStatistics;

use super::{DEFAULT_PRECISION, read_input};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze (reads standard input when omitted or `-`).
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct StatsOutput {
    #[serde(flatten)]
    statistics: CorpusStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    words_per_sentence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    syllables_per_word: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    letters_per_word: Option<f64>,
}

impl StatsOutput {
    fn new(statistics: CorpusStatistics) -> Self {
        Self {
            statistics,
            words_per_sentence: statistics.words_per_sentence().ok(),
            syllables_per_word: statistics.syllables_per_word().ok(),
            letters_per_word: statistics.letters_per_word().ok(),
        }
    }
}

/// Print corpus statistics for a file or standard input.
///
/// Empty input is not an error here: every count is simply zero.
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    precision: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing stats command");

    let (content, _label) = read_input(args.file.as_deref(), max_input_bytes)?;
    let output = StatsOutput::new(CorpusStatistics::from_text(&content));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let stats = &output.statistics;
    println!("{}: {}", "Words".dimmed(), stats.words);
    println!("{}: {}", "Sentences".dimmed(), stats.sentences);
    println!("{}: {}", "Syllables".dimmed(), stats.syllables);
    println!("{}: {}", "Letters".dimmed(), stats.letters);
    println!("{}: {}", "Complex words".dimmed(), stats.complex_words);
    println!("{}: {}", "Long words".dimmed(), stats.long_words);

    let precision = precision.unwrap_or(DEFAULT_PRECISION);
    print_ratio("Words per sentence", output.words_per_sentence, precision);
    print_ratio("Syllables per word", output.syllables_per_word, precision);
    print_ratio("Letters per word", output.letters_per_word, precision);

    Ok(())
}

fn print_ratio(label: &str, value: Option<f64>, precision: usize) {
    if let Some(v) = value {
        println!("{}: {v:.precision$}", label.dimmed());
    }
}
