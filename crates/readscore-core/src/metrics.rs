//! Readability formulas.
//!
//! Each formula is a pure function of [`CorpusStatistics`]. [`Metric`] is the
//! closed set of formulas; [`Metric::score`] dispatches to them.
//!
//! All formulas refuse to score text with no words or no sentences and
//! return [`AnalysisError::EmptyInput`] instead of NaN or infinity.
//!
//! References:
//! - <https://en.wikipedia.org/wiki/Flesch%E2%80%93Kincaid_readability_tests>
//! - <https://en.wikipedia.org/wiki/Gunning_fog_index>
//! - <https://en.wikipedia.org/wiki/SMOG>
//! - <https://en.wikipedia.org/wiki/Coleman%E2%80%93Liau_index>
//! - <https://en.wikipedia.org/wiki/Automated_readability_index>
//! - <https://it.wikipedia.org/wiki/Indice_Gulpease>
//! - <https://en.wikipedia.org/wiki/Lix_(readability_test)>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::stats::CorpusStatistics;

/// How to read a metric's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Higher scores mean easier text (Flesch Reading Ease, Gulpease).
    Ease,
    /// Approximate school grade needed to follow the text.
    GradeLevel,
    /// Higher scores mean harder text, not calibrated to grades (LIX, RIX).
    Difficulty,
}

impl MetricKind {
    /// Returns the kind as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::GradeLevel => "grade-level",
            Self::Difficulty => "difficulty",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A readability metric.
///
/// Serializes as its kebab-case identifier; deserializes through [`FromStr`],
/// so config files accept the same names and aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Flesch Reading Ease (0-100, higher is easier).
    #[cfg_attr(feature = "clap", value(alias = "fre"))]
    FleschReadingEase,
    /// Flesch-Kincaid Grade Level.
    #[cfg_attr(feature = "clap", value(alias = "fkgl"))]
    FleschKincaidGrade,
    /// Gunning Fog Index.
    GunningFog,
    /// SMOG Index.
    Smog,
    /// Coleman-Liau Index.
    #[cfg_attr(feature = "clap", value(alias = "cli"))]
    ColemanLiau,
    /// Automated Readability Index.
    #[cfg_attr(feature = "clap", value(alias = "ari"))]
    AutomatedReadabilityIndex,
    /// Gulpease Index, calibrated for Italian.
    Gulpease,
    /// Fernández Huerta, a Flesch variant for Spanish.
    FernandezHuerta,
    /// Flesch-Douma, a Flesch variant for Dutch.
    Douma,
    /// Kandel-Moles, a Flesch variant for French.
    KandelMoles,
    /// LIX (Läsbarhetsindex).
    Lix,
    /// RIX, Anderson's simplification of LIX.
    Rix,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Self; 12] = [
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::GunningFog,
        Self::Smog,
        Self::ColemanLiau,
        Self::AutomatedReadabilityIndex,
        Self::Gulpease,
        Self::FernandezHuerta,
        Self::Douma,
        Self::KandelMoles,
        Self::Lix,
        Self::Rix,
    ];

    /// The six English-calibrated metrics most tools report.
    pub const CORE: [Self; 6] = [
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::GunningFog,
        Self::Smog,
        Self::ColemanLiau,
        Self::AutomatedReadabilityIndex,
    ];

    /// Returns the metric identifier (kebab-case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "flesch-reading-ease",
            Self::FleschKincaidGrade => "flesch-kincaid-grade",
            Self::GunningFog => "gunning-fog",
            Self::Smog => "smog",
            Self::ColemanLiau => "coleman-liau",
            Self::AutomatedReadabilityIndex => "automated-readability-index",
            Self::Gulpease => "gulpease",
            Self::FernandezHuerta => "fernandez-huerta",
            Self::Douma => "douma",
            Self::KandelMoles => "kandel-moles",
            Self::Lix => "lix",
            Self::Rix => "rix",
        }
    }

    /// Human-readable name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade Level",
            Self::GunningFog => "Gunning Fog Index",
            Self::Smog => "SMOG Index",
            Self::ColemanLiau => "Coleman-Liau Index",
            Self::AutomatedReadabilityIndex => "Automated Readability Index",
            Self::Gulpease => "Gulpease Index",
            Self::FernandezHuerta => "Fernandez Huerta",
            Self::Douma => "Flesch-Douma",
            Self::KandelMoles => "Kandel-Moles",
            Self::Lix => "LIX",
            Self::Rix => "RIX",
        }
    }

    /// How to read this metric's value.
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::FleschReadingEase
            | Self::Gulpease
            | Self::FernandezHuerta
            | Self::Douma
            | Self::KandelMoles => MetricKind::Ease,
            Self::FleschKincaidGrade
            | Self::GunningFog
            | Self::Smog
            | Self::ColemanLiau
            | Self::AutomatedReadabilityIndex => MetricKind::GradeLevel,
            Self::Lix | Self::Rix => MetricKind::Difficulty,
        }
    }

    /// Compute this metric from corpus statistics.
    pub fn score(&self, stats: &CorpusStatistics) -> AnalysisResult<f64> {
        match self {
            Self::FleschReadingEase => flesch_reading_ease(stats),
            Self::FleschKincaidGrade => flesch_kincaid_grade(stats),
            Self::GunningFog => gunning_fog(stats),
            Self::Smog => smog(stats),
            Self::ColemanLiau => coleman_liau(stats),
            Self::AutomatedReadabilityIndex => automated_readability_index(stats),
            Self::Gulpease => gulpease(stats),
            Self::FernandezHuerta => fernandez_huerta(stats),
            Self::Douma => douma(stats),
            Self::KandelMoles => kandel_moles(stats),
            Self::Lix => lix(stats),
            Self::Rix => rix(stats),
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AnalysisError;

    /// Parse a metric name. Accepts kebab-case, snake_case, spaces, any case,
    /// and the short aliases `fre`, `fkgl`, `ari`, `cli`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        let alias = match key.as_str() {
            "fre" | "flesch" => Some(Self::FleschReadingEase),
            "fkgl" | "flesch-kincaid" => Some(Self::FleschKincaidGrade),
            "fog" => Some(Self::GunningFog),
            "cli" => Some(Self::ColemanLiau),
            "ari" => Some(Self::AutomatedReadabilityIndex),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|m| m.as_str() == key))
            .ok_or_else(|| AnalysisError::UnknownMetric {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl TryFrom<String> for Metric {
    type Error = AnalysisError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

fn ensure_scorable(stats: &CorpusStatistics) -> AnalysisResult<()> {
    if stats.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(())
}

/// Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`.
pub fn flesch_reading_ease(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let wps = stats.words_per_sentence()?;
    let spw = stats.syllables_per_word()?;
    Ok(206.835 - 1.015 * wps - 84.6 * spw)
}

/// Flesch-Kincaid Grade Level: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`.
pub fn flesch_kincaid_grade(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let wps = stats.words_per_sentence()?;
    let spw = stats.syllables_per_word()?;
    Ok(0.39f64.mul_add(wps, 11.8 * spw) - 15.59)
}

/// Gunning Fog: `0.4 * ((words/sentences) + 100 * (complex/words))`.
pub fn gunning_fog(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let wps = stats.words_per_sentence()?;
    let complex = stats.complex_word_ratio()?;
    Ok(0.4 * 100.0f64.mul_add(complex, wps))
}

/// SMOG: `3.1291 + 1.0430 * sqrt(30 * complex/sentences)`.
pub fn smog(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let complex_per_sentence = stats.complex_words_per_sentence()?;
    Ok(1.0430f64.mul_add((30.0 * complex_per_sentence).sqrt(), 3.1291))
}

/// Coleman-Liau: `5.89 * (letters/words) - 0.3 * (sentences per 100 words) - 15.8`.
pub fn coleman_liau(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let letters_per_word = stats.letters_per_word()?;
    let sentences_per_100 = 100.0 * stats.sentences_per_word()?;
    Ok(5.89f64.mul_add(letters_per_word, -0.3 * sentences_per_100) - 15.8)
}

/// Automated Readability Index: `4.71 * (letters/words) + 0.5 * (words/sentences) - 21.43`.
pub fn automated_readability_index(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let letters_per_word = stats.letters_per_word()?;
    let wps = stats.words_per_sentence()?;
    Ok(4.71f64.mul_add(letters_per_word, 0.5 * wps) - 21.43)
}

/// Gulpease: `89 + (300 * sentences - 10 * letters) / words`.
pub fn gulpease(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let sentences_per_word = stats.sentences_per_word()?;
    let letters_per_word = stats.letters_per_word()?;
    Ok(300.0f64.mul_add(sentences_per_word, 89.0) - 10.0 * letters_per_word)
}

/// Fernandez Huerta: `206.84 - 0.6 * (syllables per 100 words) - 1.02 * (sentences per 100 words)`.
pub fn fernandez_huerta(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let syllables_per_100 = 100.0 * stats.syllables_per_word()?;
    let sentences_per_100 = 100.0 * stats.sentences_per_word()?;
    Ok(206.84 - 0.6 * syllables_per_100 - 1.02 * sentences_per_100)
}

/// Flesch-Douma: `206.84 - 0.33 * (words/sentences) - 0.77 * (syllables per 100 words)`.
pub fn douma(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let wps = stats.words_per_sentence()?;
    let syllables_per_100 = 100.0 * stats.syllables_per_word()?;
    Ok(206.84 - 0.33 * wps - 0.77 * syllables_per_100)
}

/// Kandel-Moles: `209 - 1.15 * (words/sentences) - 0.68 * (syllables per 100 words)`.
pub fn kandel_moles(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let wps = stats.words_per_sentence()?;
    let syllables_per_100 = 100.0 * stats.syllables_per_word()?;
    Ok(209.0 - 1.15 * wps - 0.68 * syllables_per_100)
}

/// LIX: `100 * (long words/words) + words/sentences`.
pub fn lix(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    let long = stats.long_word_ratio()?;
    let wps = stats.words_per_sentence()?;
    Ok(100.0f64.mul_add(long, wps))
}

/// RIX: `long words / sentences`.
pub fn rix(stats: &CorpusStatistics) -> AnalysisResult<f64> {
    ensure_scorable(stats)?;
    stats.long_words_per_sentence()
}
