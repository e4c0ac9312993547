//! Cross-word elision (sinalefe) detection.

use std::sync::LazyLock;

use regex::Regex;

use super::tables::{is_vowel, ELISION_FUNCTION_WORDS};

/// Regex matching contracted articles and prepositions like `l'` or `dell'`.
#[allow(clippy::expect_used)]
static RE_CONTRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:l|d|c|n|s|qu|bell)'").expect("valid regex: RE_CONTRACTION")
});

/// Number of adjacent word pairs whose boundary vowels merge.
///
/// Words must already be normalized (lower-case, punctuation stripped).
pub fn count_elisions<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .windows(2)
        .filter(|pair| elides(pair[0].as_ref(), pair[1].as_ref()))
        .count()
}

/// True when the last vowel of `first` merges with the first vowel of `second`.
pub fn elides(first: &str, second: &str) -> bool {
    let (Some(end), Some(start)) = (first.chars().next_back(), second.chars().next()) else {
        return false;
    };
    if !is_vowel(end) || !is_vowel(start) {
        return false;
    }

    let weak = matches!(end, 'i' | 'u') || matches!(start, 'i' | 'u');
    let same = end == start;
    let function_word = RE_CONTRACTION.is_match(first)
        || ELISION_FUNCTION_WORDS.iter().any(|w| first.ends_with(w));
    let open_pair = matches!((end, start), ('o', 'a') | ('a', 'i' | 'e') | ('e', 'a' | 'i'));

    weak || same || function_word || open_pair
}
