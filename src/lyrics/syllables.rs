//! Syllable estimation for a line of verse.
//!
//! Each word is counted by vowel runs, with Italian hiatus pairs split into
//! two syllables and English silent endings removed. Elisions across word
//! boundaries are then subtracted from the line total.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use super::elision::count_elisions;
use super::tables::{
    is_syllable_vowel, HIATUS_PAIRS, ITALIAN_FINAL_E, SILENT_E_PATTERNS, SYLLABLE_EXCEPTIONS,
};

/// Regex matching everything a line loses during normalization.
#[allow(clippy::expect_used)]
static RE_STRIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s'àèìòùáéíóú]").expect("valid regex: RE_STRIP")
});

/// English endings where a final `e` is not pronounced.
#[allow(clippy::expect_used)]
static SILENT_E: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(SILENT_E_PATTERNS).expect("valid regex set: SILENT_E")
});

/// Lower-case a line, drop punctuation and split it into words.
///
/// Typographic apostrophes are folded into `'` so `l’amore` stays one word.
pub fn normalize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase().replace('\u{2019}', "'");
    RE_STRIP
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Estimated syllables in a line; 0 only for blank input.
pub fn count(line: &str) -> usize {
    if line.trim().is_empty() {
        return 0;
    }

    let words = normalize(line);
    let total: usize = words.iter().map(|w| count_word(w)).sum();
    let elisions = count_elisions(words.as_slice());
    if elisions > 0 {
        tracing::trace!("{elisions} elision(s) in {line:?}");
    }

    total.saturating_sub(elisions).max(1)
}

/// Estimated syllables in a single normalized word (at least 1).
pub fn count_word(word: &str) -> usize {
    if let Some(&n) = SYLLABLE_EXCEPTIONS.get(word) {
        return n;
    }

    let chars: Vec<char> = word.chars().collect();
    let mut count = vowel_runs(&chars);

    if count > 1 && has_silent_e(word, &chars) {
        count -= 1;
    }

    if count > 1 && word.ends_with("ed") && chars.len() >= 3 {
        let before = chars[chars.len() - 3];
        if before != 't' && before != 'd' {
            count -= 1;
        }
    }

    count.max(1)
}

/// Count vowel runs, splitting runs at hiatus pairs.
fn vowel_runs(chars: &[char]) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;

    for &c in chars {
        if !is_syllable_vowel(c) {
            prev = None;
            continue;
        }
        match prev {
            None => count += 1,
            Some(p) if HIATUS_PAIRS.contains(&(p, c)) => count += 1,
            Some(_) => {}
        }
        prev = Some(c);
    }

    count
}

fn has_silent_e(word: &str, chars: &[char]) -> bool {
    let [.., before, 'e'] = chars else {
        return false;
    };
    before.is_alphabetic()
        && !is_syllable_vowel(*before)
        && !ITALIAN_FINAL_E.iter().any(|w| *w == word)
        && SILENT_E.is_match(word)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(count(""), 0);
        assert_eq!(count("   \t "), 0);
    }

    #[test]
    fn test_degenerate_lines_still_count() {
        assert!(count("a") >= 1);
        assert_eq!(count("..."), 1);
        assert_eq!(count("nth"), 1);
    }

    #[test]
    fn test_normalize_keeps_apostrophes_and_accents() {
        assert_eq!(normalize("L’amore, perché?"), vec!["l'amore", "perché"]);
        assert_eq!(normalize("  Hello -- world!  "), vec!["hello", "world"]);
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(count_word("the"), 1);
        assert_eq!(count_word("people"), 2);
        assert_eq!(count_word("qui"), 1);
    }

    #[test]
    fn test_vowel_runs_and_hiatus() {
        assert_eq!(count_word("roses"), 2);
        assert_eq!(count_word("beautiful"), 3);
        assert_eq!(count_word("piano"), 3);
        assert_eq!(count_word("violets"), 3);
        assert_eq!(count_word("happy"), 2);
    }

    #[test]
    fn test_silent_e_only_for_english_endings() {
        assert_eq!(count_word("make"), 1);
        assert_eq!(count_word("time"), 1);
        assert_eq!(count_word("love"), 1);
        assert_eq!(count_word("table"), 2);
        assert_eq!(count_word("amore"), 3);
        assert_eq!(count_word("notte"), 2);
    }

    #[test]
    fn test_italian_final_e_is_voiced() {
        for word in ["sole", "cane", "luce", "voce", "pace", "nave", "rose", "fine", "vite"] {
            assert_eq!(count_word(word), 2, "{word}");
        }
        // sole|e elides
        assert_eq!(count("il sole e la luce"), 6);
        assert_eq!(count("Sei la mia luce"), 5);
        assert_eq!(count("la voce"), 3);
    }

    #[test]
    fn test_ed_suffix() {
        assert_eq!(count_word("loved"), 1);
        assert_eq!(count_word("wanted"), 2);
        assert_eq!(count_word("faded"), 2);
        assert_eq!(count_word("red"), 1);
    }

    #[test]
    fn test_elision_reduces_line_total() {
        let apart = count_word("la") + count_word("amica");
        assert_eq!(count("la amica"), apart - 1);
        assert_eq!(count("La amica!"), 3);
    }

    #[test]
    fn test_line_totals() {
        assert_eq!(count("Roses are red"), 4);
        assert_eq!(count("Nel mezzo del cammin di nostra vita"), 11);
    }
}
