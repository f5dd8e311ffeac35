//! Corpus statistics.
//!
//! Flattens a [`Segmentation`] into the counts every readability formula is
//! built from.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables::{estimate_syllables, is_letter};
use crate::text::{self, Segmentation};

/// Syllable count at which a word is "complex" (Gunning Fog, SMOG).
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Letter count at which a word is "long" (LIX, RIX).
pub const LONG_WORD_LETTERS: usize = 6;

/// Surface statistics of a text.
///
/// Invariants: `sentences >= 1` exactly when `words >= 1`;
/// `syllables >= words`; `complex_words <= words`; `long_words <= words`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Estimated syllables across all words.
    pub syllables: usize,
    /// Alphabetic characters across all words.
    pub letters: usize,
    /// Words with three or more estimated syllables.
    pub complex_words: usize,
    /// Words with six or more letters.
    pub long_words: usize,
}

impl CorpusStatistics {
    /// Segment and aggregate `text` in one step.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn from_text(text: &str) -> Self {
        aggregate(&text::segment(text))
    }

    /// Whether there is nothing to score.
    pub const fn is_empty(&self) -> bool {
        self.words == 0 || self.sentences == 0
    }

    /// Average words per sentence.
    pub fn words_per_sentence(&self) -> AnalysisResult<f64> {
        ratio(self.words, self.sentences)
    }

    /// Average syllables per word.
    pub fn syllables_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.syllables, self.words)
    }

    /// Average letters per word.
    pub fn letters_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.letters, self.words)
    }

    /// Sentences per word.
    pub fn sentences_per_word(&self) -> AnalysisResult<f64> {
        ratio(self.sentences, self.words)
    }

    /// Share of complex words, 0.0 to 1.0.
    pub fn complex_word_ratio(&self) -> AnalysisResult<f64> {
        ratio(self.complex_words, self.words)
    }

    /// Share of long words, 0.0 to 1.0.
    pub fn long_word_ratio(&self) -> AnalysisResult<f64> {
        ratio(self.long_words, self.words)
    }

    /// Complex words per sentence.
    pub fn complex_words_per_sentence(&self) -> AnalysisResult<f64> {
        ratio(self.complex_words, self.sentences)
    }

    /// Long words per sentence.
    pub fn long_words_per_sentence(&self) -> AnalysisResult<f64> {
        ratio(self.long_words, self.sentences)
    }
}

/// Aggregate a segmented text into [`CorpusStatistics`].
///
/// Every word contributes at least one syllable, so letterless tokens such as
/// `42` still count toward the syllable total.
pub fn aggregate(segmentation: &Segmentation) -> CorpusStatistics {
    let mut stats = CorpusStatistics {
        sentences: segmentation.sentence_count(),
        ..CorpusStatistics::default()
    };

    for word in segmentation.words() {
        let syllables = estimate_syllables(word).max(1);
        let letters = word.chars().filter(|&c| is_letter(c)).count();

        stats.words += 1;
        stats.syllables += syllables;
        stats.letters += letters;
        if syllables >= COMPLEX_WORD_SYLLABLES {
            stats.complex_words += 1;
        }
        if letters >= LONG_WORD_LETTERS {
            stats.long_words += 1;
        }
    }

    tracing::debug!(
        words = stats.words,
        sentences = stats.sentences,
        syllables = stats.syllables,
        letters = stats.letters,
        complex_words = stats.complex_words,
        "aggregated corpus statistics"
    );
    stats
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> AnalysisResult<f64> {
    if denominator == 0 {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(numerator as f64 / denominator as f64)
}
