//! Info command: version and the settings `score` will run with.

use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::Metric;
use readscore_core::config::{Config, ConfigSources};

use super::DEFAULT_PRECISION;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Everything `info` reports.
#[derive(Serialize)]
struct Report<'a> {
    name: &'static str,
    version: &'static str,
    config: Settings<'a>,
}

/// Effective settings and where they came from.
#[derive(Serialize)]
struct Settings<'a> {
    /// Highest-precedence config file, or null when only defaults apply.
    config_file: Option<&'a Utf8Path>,
    /// Every merged config file, lowest precedence first.
    config_files: Vec<&'a Utf8Path>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<&'a Utf8Path>,
    /// Metrics `score` reports when none are given on the command line.
    metrics: &'a [Metric],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    precision: usize,
    /// Null when the input limit is disabled.
    max_input_bytes: Option<usize>,
}

impl<'a> Settings<'a> {
    fn resolve(config: &'a Config, sources: &'a ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file(),
            config_files: sources.files().collect(),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_deref(),
            metrics: config.metrics.as_deref().unwrap_or(&Metric::ALL[..]),
            max_grade: config.max_grade,
            precision: config.precision.unwrap_or(DEFAULT_PRECISION),
            max_input_bytes: config.input_limit(),
        }
    }

    fn print(&self) {
        let files = if self.config_files.is_empty() {
            "none (defaults)".yellow().to_string()
        } else {
            self.config_files
                .iter()
                .map(|f| f.cyan().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let metrics = if self.metrics.len() == Metric::ALL.len() {
            "all".to_string()
        } else {
            self.metrics
                .iter()
                .map(Metric::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let max_grade = self
            .max_grade
            .map_or_else(|| "none".dimmed().to_string(), |g| format!("{g:.1}"));
        let limit = self
            .max_input_bytes
            .map_or_else(|| "disabled".yellow().to_string(), |n| format!("{n} bytes"));

        let rows = [
            ("config files", files),
            ("log level", self.log_level.to_string()),
            (
                "log dir",
                self.log_dir
                    .map_or_else(|| "none".dimmed().to_string(), ToString::to_string),
            ),
            ("metrics", metrics),
            ("max grade", max_grade),
            ("precision", self.precision.to_string()),
            ("input limit", limit),
        ];
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in rows {
            println!("{}  {value}", format!("{label:<width$}").dimmed());
        }
    }
}

/// Print the version and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(files = sources.files().count(), "executing info command");

    let report = Report {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: Settings::resolve(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", report.name.bold(), report.version.green());
        println!();
        report.config.print();
    }
    Ok(())
}
