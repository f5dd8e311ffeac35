//! Core library for readscore.
//!
//! Estimates how hard a passage is to read from surface statistics alone:
//! words, sentences, syllables, and letters. No dictionaries, no
//! part-of-speech tagging.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word segmentation
//! - [`syllables`] - Heuristic syllable estimation
//! - [`stats`] - Corpus statistics aggregation
//! - [`metrics`] - Readability formulas
//! - [`readability`] - Scoring entry points and reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{Metric, analyze, analyze_all};
//!
//! let grade = analyze("The cat sat on the mat.", Metric::FleschKincaidGrade).unwrap();
//! assert!(grade < 0.0);
//!
//! let scores = analyze_all("The cat sat on the mat.").unwrap();
//! assert_eq!(scores.len(), Metric::ALL.len());
//!
//! assert!(analyze_all("").is_err());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod metrics;
pub mod readability;
pub mod stats;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use metrics::{Metric, MetricKind};
pub use readability::{ReadabilityReport, analyze, analyze_all, analyze_named, check_readability};
pub use stats::CorpusStatistics;
