//! Metrics command: list what `score` can report.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::{Metric, MetricKind};

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug, Default)]
pub struct MetricsArgs {}

#[derive(Serialize)]
struct MetricInfo {
    id: Metric,
    name: &'static str,
    kind: MetricKind,
}

/// List every metric with its identifier and kind.
#[instrument(name = "cmd_metrics", skip_all)]
pub fn cmd_metrics(_args: MetricsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing metrics command");

    let metrics: Vec<MetricInfo> = Metric::ALL
        .into_iter()
        .map(|metric| MetricInfo {
            id: metric,
            name: metric.display_name(),
            kind: metric.kind(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let width = Metric::ALL.iter().map(|m| m.as_str().len()).max().unwrap_or(0);
    for info in &metrics {
        let id = format!("{:<width$}", info.id.as_str());
        println!("{}  {} {}", id.cyan(), info.name, format!("({})", info.kind).dimmed());
    }
    Ok(())
}
