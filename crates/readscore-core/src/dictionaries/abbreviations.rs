//! Abbreviation list for sentence boundary detection.
//!
//! A period after one of these words does not close a sentence. Ordinary
//! words that also serve as abbreviations ("no", "in", "sat", "miss") are
//! not listed.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not trigger sentence breaks (lowercase, no trailing period).
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "mme", "mlle", "dr", "prof", "rev", "fr", "sr", "jr", "messrs",
        "msgr", "hon", "esq", "phd", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt",
        "adm", "cmdr", "sen", "gov", "pres", "hr", "sra", "sres", "dott",
    ]);

    // Academic degrees
    set.extend([
        "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m", "d.d.s",
    ]);

    // Latin and scholarly
    set.extend([
        "etc", "vs", "e.g", "i.e", "al", "cf", "viz", "ibid", "n.b", "p.s", "r.s.v.p", "z.b",
        "bzw", "usw", "ca",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec", "tue", "tues", "thu", "thur", "thurs",
    ]);

    // Addresses and geography
    set.extend([
        "st", "ave", "blvd", "rd", "ct", "ln", "apt", "ste", "bldg", "dept", "u.s", "u.k",
        "u.s.a", "e.u", "n.y", "calif", "fla",
    ]);

    // Business and organizations
    set.extend(["inc", "corp", "ltd", "llc", "bros", "assn", "mfg", "intl", "gmbh"]);

    // Units of measurement
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "sq", "mph", "kph",
        "rpm",
    ]);

    // References
    set.extend([
        "vol", "nos", "pp", "ch", "fig", "figs", "eq", "approx", "ref", "refs", "eds",
        "encl", "resp",
    ]);

    set
});

/// Check if a word is a known abbreviation (case-insensitive, trailing periods ignored).
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}
