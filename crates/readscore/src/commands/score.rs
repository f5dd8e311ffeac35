//! Score command: readability metrics for a file or standard input.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscore_core::config::Config;
use readscore_core::{Metric, ReadabilityReport, readability};

use super::{DEFAULT_PRECISION, read_input};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze (reads standard input when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Metric to report (repeatable). Defaults to the configured metrics, or all.
    #[arg(short, long = "metric", value_enum, value_name = "METRIC")]
    pub metrics: Vec<Metric>,

    /// Maximum acceptable Flesch-Kincaid grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score readability of a file or standard input.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(metrics = ?args.metrics, max_grade = ?args.max_grade, "executing score command");

    let (content, label) = read_input(args.file.as_deref(), max_input_bytes)?;

    let metrics = if args.metrics.is_empty() {
        config.metrics.clone()
    } else {
        Some(args.metrics)
    };
    let max_grade = args.max_grade.or(config.max_grade);

    let report = readability::check_readability(&content, metrics.as_deref(), max_grade)
        .with_context(|| format!("failed to score {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scores(&report, config.precision.unwrap_or(DEFAULT_PRECISION));
    }

    if report.over_max {
        let max = report.max_grade.unwrap_or(0.0);
        bail!(
            "{label} scores grade {:.1} (max: {max:.1}). Shorten sentences or use shorter words.",
            report.grade,
        );
    }
    if !global_json && let Some(max) = report.max_grade {
        println!(
            "{} {label} scores grade {:.1} (max: {max:.1})",
            "PASS:".green(),
            report.grade,
        );
    }

    Ok(())
}

fn print_scores(report: &ReadabilityReport, precision: usize) {
    let width = report
        .scores
        .keys()
        .map(|metric| metric.display_name().len())
        .max()
        .unwrap_or(0);
    for (metric, value) in &report.scores {
        let name = format!("{:<width$}", metric.display_name());
        println!("{}: {value:.precision$}", name.dimmed());
    }
}
