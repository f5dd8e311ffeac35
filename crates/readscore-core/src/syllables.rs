//! Heuristic syllable estimation.
//!
//! Counts maximal vowel runs, then applies an ordered list of corrections.
//! There is no dictionary, so irregular spellings ("queue", "recipe") come out
//! wrong the same way in every Western-European language.

/// A correction applied to the raw vowel-run count of a normalized word.
type Correction = fn(&Normalized, usize) -> usize;

/// A word reduced to lower-case ASCII letters.
struct Normalized {
    letters: Vec<u8>,
    /// The last letter carried an accent before folding ("café", "résumé").
    accented_final: bool,
}

/// Corrections, applied in order after vowel-run counting.
const CORRECTIONS: &[Correction] = &[silent_e];

/// Estimate the number of syllables in a single word.
///
/// Returns 0 when the word has no letters, and at least 1 otherwise.
///
/// ```
/// use readscore_core::syllables::estimate_syllables;
///
/// assert_eq!(estimate_syllables("cake"), 1);
/// assert_eq!(estimate_syllables("table"), 2);
/// assert_eq!(estimate_syllables(""), 0);
/// ```
pub fn estimate_syllables(word: &str) -> usize {
    let word = normalize(word);
    if word.letters.is_empty() {
        return 0;
    }

    let vowels = vowel_mask(&word.letters);
    let runs = count_vowel_runs(&vowels);
    let corrected = CORRECTIONS
        .iter()
        .fold(runs, |count, correction| correction(&word, count));

    corrected.max(1)
}

/// Whether `ch` is a letter the estimator reads: ASCII, or a Western-European
/// accented letter in either case.
///
/// Letters from other scripts (Cyrillic, CJK) are not counted.
pub fn is_letter(ch: char) -> bool {
    ch.to_lowercase()
        .all(|lower| lower.is_ascii_lowercase() || fold_diacritic(lower).is_some())
}

/// Lower-case the word, fold diacritics, and keep ASCII letters only.
fn normalize(word: &str) -> Normalized {
    let mut letters = Vec::with_capacity(word.len());
    let mut accented_final = false;
    for ch in word.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() {
            letters.push(ch as u8);
            accented_final = false;
        } else if let Some(folded) = fold_diacritic(ch) {
            letters.extend_from_slice(folded.as_bytes());
            accented_final = true;
        }
    }
    Normalized {
        letters,
        accented_final,
    }
}

/// Map a lower-case Western-European letter to its unaccented spelling.
const fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' | 'ľ' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' => "s",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

const fn is_plain_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Mark which letters are vowels.
///
/// `y` only counts when neither neighbour is a plain vowel: it is a vowel in
/// "rhythm" and "happy", a glide in "yes" and "day".
fn vowel_mask(letters: &[u8]) -> Vec<bool> {
    letters
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if b == b'y' {
                let prev = i.checked_sub(1).and_then(|p| letters.get(p));
                let next = letters.get(i + 1);
                !prev.is_some_and(|&p| is_plain_vowel(p))
                    && !next.is_some_and(|&n| is_plain_vowel(n))
            } else {
                is_plain_vowel(b)
            }
        })
        .collect()
}

fn count_vowel_runs(vowels: &[bool]) -> usize {
    let mut runs = 0;
    let mut previous_was_vowel = false;
    for &is_vowel in vowels {
        if is_vowel && !previous_was_vowel {
            runs += 1;
        }
        previous_was_vowel = is_vowel;
    }
    runs
}

/// Drop a final silent `e` ("cake", "time"), but not the `e` of a
/// consonant + `le` ending ("table", "little"), not one merged into a longer
/// vowel run ("free"), not an accented one ("café"), and never below one
/// syllable.
fn silent_e(word: &Normalized, count: usize) -> usize {
    let letters = word.letters.as_slice();
    let [.., before, b'e'] = letters else {
        return count;
    };
    if count <= 1 || word.accented_final || is_plain_vowel(*before) || *before == b'y' {
        return count;
    }
    let consonant_le = *before == b'l'
        && letters
            .len()
            .checked_sub(3)
            .and_then(|i| letters.get(i))
            .is_some_and(|&c| !is_plain_vowel(c) && c != b'y');
    if consonant_le { count } else { count - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_letterless_words() {
        assert_eq!(estimate_syllables(""), 0);
        assert_eq!(estimate_syllables("42"), 0);
        assert_eq!(estimate_syllables("--"), 0);
    }

    #[test]
    fn monosyllables() {
        for word in ["the", "cat", "sat", "on", "mat", "a", "strength", "day", "yes"] {
            assert_eq!(estimate_syllables(word), 1, "{word}");
        }
    }

    #[test]
    fn silent_e_is_dropped() {
        assert_eq!(estimate_syllables("cake"), 1);
        assert_eq!(estimate_syllables("time"), 1);
        assert_eq!(estimate_syllables("complete"), 2);
    }

    #[test]
    fn consonant_le_keeps_its_syllable() {
        assert_eq!(estimate_syllables("table"), 2);
        assert_eq!(estimate_syllables("little"), 2);
        assert_eq!(estimate_syllables("whale"), 1);
    }

    #[test]
    fn final_e_in_longer_run_is_not_silent() {
        assert_eq!(estimate_syllables("free"), 1);
        assert_eq!(estimate_syllables("agree"), 2);
        assert_eq!(estimate_syllables("be"), 1);
    }

    #[test]
    fn y_as_vowel_only_between_consonants() {
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("happy"), 2);
        assert_eq!(estimate_syllables("boy"), 1);
        assert_eq!(estimate_syllables("my"), 1);
    }

    #[test]
    fn multisyllabic_words() {
        assert_eq!(estimate_syllables("hello"), 2);
        assert_eq!(estimate_syllables("beautiful"), 3);
        assert_eq!(estimate_syllables("readability"), 5);
        assert_eq!(estimate_syllables("Readability"), 5);
        assert_eq!(estimate_syllables("organization"), 5);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(estimate_syllables("Don't"), 1);
        assert_eq!(estimate_syllables("well-known"), 2);
        assert_eq!(estimate_syllables("HELLO!"), 2);
    }

    #[test]
    fn diacritics_are_folded() {
        assert_eq!(estimate_syllables("café"), 2);
        assert_eq!(estimate_syllables("résumé"), 3);
        assert_eq!(estimate_syllables("façade"), 2);
        assert_eq!(estimate_syllables("Übung"), 2);
    }

    #[test]
    fn letters_are_latin_script_only() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('é'));
        assert!(is_letter('Ç'));
        assert!(!is_letter('7'));
        assert!(!is_letter('-'));
        assert!(!is_letter('П'));
        assert!(!is_letter('東'));
        assert!(!is_letter('タ'));
    }

    #[test]
    fn deterministic() {
        for word in ["queue", "recipe", "extraordinary", "x"] {
            assert_eq!(estimate_syllables(word), estimate_syllables(word));
        }
    }
}
