//! Readability scoring entry points.
//!
//! Text goes through [`text::segment`], [`stats::aggregate`] and then one or
//! more [`Metric`] formulas. Every function here is a pure function of its
//! input text.
//!
//! ```
//! use readscore_core::{Metric, readability};
//!
//! let ease = readability::analyze("The cat sat on the mat.", Metric::FleschReadingEase).unwrap();
//! assert!((ease - 116.145).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::metrics::{self, Metric};
use crate::stats::{self, CorpusStatistics};
use crate::text;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid Grade Level, always computed for the grade gate.
    pub grade: f64,
    /// Requested scores, keyed by metric.
    pub scores: BTreeMap<Metric, f64>,
    /// Statistics the scores were computed from.
    pub statistics: CorpusStatistics,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Compute one metric for `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, metric: Metric) -> AnalysisResult<f64> {
    metric.score(&CorpusStatistics::from_text(text))
}

/// Compute one metric identified by name (see [`Metric`]'s `FromStr`).
pub fn analyze_named(text: &str, name: &str) -> AnalysisResult<f64> {
    analyze(text, name.parse()?)
}

/// Compute every metric for `text`.
///
/// Fails with [`AnalysisError::EmptyInput`](crate::AnalysisError::EmptyInput)
/// when the text has no words, since no metric is defined then.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_all(text: &str) -> AnalysisResult<BTreeMap<Metric, f64>> {
    score_all(&CorpusStatistics::from_text(text), &Metric::ALL)
}

/// Compute `metrics` from precomputed statistics.
pub fn score_all(
    statistics: &CorpusStatistics,
    metrics: &[Metric],
) -> AnalysisResult<BTreeMap<Metric, f64>> {
    metrics
        .iter()
        .map(|metric| Ok((*metric, metric.score(statistics)?)))
        .collect()
}

/// Score `text` and check it against an optional grade ceiling.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `metrics` - Metrics to include in the report. `None` means all of them.
/// * `max_grade` - Optional maximum acceptable Flesch-Kincaid grade level.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    metrics: Option<&[Metric]>,
    max_grade: Option<f64>,
) -> AnalysisResult<ReadabilityReport> {
    let statistics = stats::aggregate(&text::segment(text));
    let grade = metrics::flesch_kincaid_grade(&statistics)?;
    let scores = score_all(&statistics, metrics.unwrap_or(&Metric::ALL))?;
    let over_max = max_grade.is_some_and(|max| grade > max);

    tracing::debug!(grade, over_max, metrics = scores.len(), "scored text");

    Ok(ReadabilityReport {
        grade,
        scores,
        statistics,
        max_grade,
        over_max,
    })
}
