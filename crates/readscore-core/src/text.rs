//! Text segmentation.
//!
//! Splits raw text into sentences and words. Sentence splitting is a
//! character scan with context-based boundary detection (abbreviations,
//! initials, decimals, URLs, ellipses); word extraction splits on whitespace
//! and in-line separators and strips surrounding punctuation.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\.(?:[A-Z]\.?)*").expect("valid regex"));

/// A sentence: the ordered words it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
}

impl Sentence {
    /// Build a sentence from already-extracted words.
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Words in reading order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Sentences and words of a text.
///
/// The word sequence is the concatenation of the sentences' words, so the two
/// views can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    sentences: Vec<Sentence>,
}

impl Segmentation {
    /// Sentences in reading order. Every sentence has at least one word.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All words across all sentences, in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.words.iter().map(String::as_str))
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Whether the text contained no words at all.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Split text into sentences and words.
///
/// Sentences that end up with no words (a stray `?!`, a lone quote mark) are
/// dropped. Text with words but no terminal punctuation is one sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Segmentation {
    let sentences: Vec<Sentence> = split_sentences(text)
        .iter()
        .map(|s| extract_words(s))
        .filter(|words| !words.is_empty())
        .map(Sentence::new)
        .collect();

    tracing::debug!(sentences = sentences.len(), "segmented text");
    Segmentation { sentences }
}

/// Split text into sentence strings with abbreviation, decimal, URL, and email awareness.
///
/// Returned sentences are trimmed. Consecutive terminators (`?!`, `...`) close
/// at most one sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        if is_sentence_terminator(ch) {
            let context = extract_context(&chars, i);

            if is_sentence_boundary(&context, &current) {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
    }

    // Remaining text
    push_trimmed(&mut sentences, &current);

    sentences
}

/// Extract words from text.
///
/// Splits on whitespace and in-line separators, then strips leading and
/// trailing characters that are neither letters nor digits. Internal hyphens
/// and apostrophes survive ("well-known", "don't"). Case is preserved.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(is_word_separator)
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_trimmed(sentences: &mut Vec<String>, current: &str) {
    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

fn is_word_separator(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ',' | ';'
                | ':'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '/'
                | '"'
                | '\u{201C}'
                | '\u{201D}'
                | '\u{2013}'
                | '\u{2014}'
                | '…'
        )
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    /// The character immediately after the terminator, whitespace included.
    next_raw: Option<char>,
    /// The first non-whitespace character after the terminator.
    char_after: Option<char>,
    text_after: String,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    let after_char = chars.get(after_start).copied();
    let after_text: String = chars[after_start.min(chars.len())..]
        .iter()
        .take(20)
        .collect();

    SentenceContext {
        punctuation: chars[pos],
        word_before: before,
        next_raw: chars.get(pos + 1).copied(),
        char_after: after_char,
        text_after: after_text,
        is_end_of_text: pos == chars.len() - 1,
    }
}

/// How far back [`get_word_before`] looks. Longer tokens are never
/// abbreviations or initials.
const LOOKBACK: usize = 16;

fn get_word_before(chars: &[char], pos: usize) -> String {
    let floor = pos.saturating_sub(LOOKBACK);
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > floor {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    // Collect the word
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == floor {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // Part of a terminator run: the run closes the sentence at its last mark
    if context.next_raw.is_some_and(is_sentence_terminator) {
        return false;
    }

    // ! and ? are almost always boundaries
    if context.punctuation == '!' || context.punctuation == '?' {
        return check_next_char_capitalization(context);
    }

    // Ellipsis only ends a sentence when a capitalized one follows
    if context.punctuation == '…' || current_sentence.ends_with("...") {
        return context.char_after.is_some_and(char::is_uppercase);
    }

    // Period inside a token: decimals (3.14), URLs, emails, file names
    if context.next_raw.is_some_and(char::is_alphanumeric) {
        return false;
    }

    // The pronoun "I", not an initial, when a capitalized word follows
    if context.word_before == "I" && context.char_after.is_some_and(char::is_uppercase) {
        return true;
    }

    if is_likely_abbreviation(&context.word_before) {
        return false;
    }

    if is_likely_initial(&context.word_before) {
        return false;
    }

    // Uppercase next char = strong boundary signal
    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char.is_lowercase() {
            return false;
        }
    }

    true
}

fn check_next_char_capitalization(context: &SentenceContext) -> bool {
    if let Some(next_char) = context.char_after
        && matches!(next_char, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')')
    {
        return context
            .text_after
            .chars()
            .skip(1)
            .find(|c| !c.is_whitespace())
            .is_some_and(char::is_uppercase);
    }
    true
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.');
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial
    let mut chars = word_clean.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn is_likely_initial(word: &str) -> bool {
    !word.is_empty() && INITIALS_PATTERN.is_match(word)
}
