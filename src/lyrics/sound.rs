//! Rhyme-key extraction.
//!
//! A rhyme key is the perceived ending sound of a word, approximated from its
//! spelling. Lookup order: exception table, ordered suffix rules, then a
//! generic tail of the word.

use crate::constants::sound::{LONG_TAIL, LONG_WORD_LEN, MIN_FALLBACK_LEN, SHORT_TAIL};
use crate::types::RhymeKey;

use super::tables::{is_vowel, SOUND_EXCEPTIONS, SUFFIXES};

/// Lower-case a word and drop everything that is not alphanumeric.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Final whitespace-separated token of a line, punctuation included.
pub fn last_word(line: &str) -> &str {
    line.split_whitespace().next_back().unwrap_or("")
}

/// Derive the rhyme key of a single word.
pub fn extract(word: &str) -> RhymeKey {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return RhymeKey::default();
    }

    if let Some(key) = SOUND_EXCEPTIONS.get(cleaned.as_str()) {
        return RhymeKey::from(*key);
    }

    if let Some(suffix) = SUFFIXES.iter().find(|s| cleaned.ends_with(*s)) {
        return RhymeKey::from(*suffix);
    }

    RhymeKey::new(fallback_key(&cleaned))
}

/// Rhyme key of the last word of a line.
pub fn extract_from_line(line: &str) -> RhymeKey {
    extract(last_word(line))
}

fn fallback_key(cleaned: &str) -> String {
    let chars: Vec<char> = cleaned.chars().collect();
    let len = chars.len();
    if len < MIN_FALLBACK_LEN {
        return cleaned.to_string();
    }

    let (penultimate, last) = (chars[len - 2], chars[len - 1]);
    let tail = if is_vowel(penultimate) && !is_vowel(last) {
        SHORT_TAIL
    } else if len >= LONG_WORD_LEN {
        LONG_TAIL
    } else {
        SHORT_TAIL
    };

    chars[len - tail..].iter().collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn key(word: &str) -> String {
        extract(word).0
    }

    #[test]
    fn test_common_endings() {
        assert_eq!(key("singing"), "ing");
        assert_eq!(key("star"), "ar");
        assert_eq!(key(""), "");
    }

    #[test]
    fn test_exceptions_beat_suffixes() {
        // "weigh" ends in -igh but sounds like "ay"
        assert_eq!(key("weigh"), "eigh");
        assert_eq!(key("High!"), "igh");
        assert_eq!(key("you,"), "oo");
        assert_eq!(key("Perché"), "é");
    }

    #[test]
    fn test_first_suffix_in_list_order_wins() {
        assert_eq!(key("friendly"), "ly");
        assert_eq!(key("nation"), "tion");
        assert_eq!(key("careless"), "less");
        assert_eq!(key("flier"), "er");
        // -ed is listed before -er
        assert_eq!(key("powered"), "ed");
        assert_eq!(key("night"), "ight");
        assert_eq!(key("red"), "ed");
    }

    #[test]
    fn test_fallback_prefers_vowel_consonant_tail() {
        assert_eq!(key("sweet"), "et");
        assert_eq!(key("sun"), "un");
        assert_eq!(key("day"), "ay");
    }

    #[test]
    fn test_fallback_long_and_short_tails() {
        assert_eq!(key("love"), "ove");
        assert_eq!(key("amico"), "ico");
        assert_eq!(key("sky"), "ky");
        assert_eq!(key("mio"), "io");
    }

    #[test]
    fn test_short_words_returned_whole() {
        assert_eq!(key("io"), "io");
        assert_eq!(key("O"), "o");
        assert_eq!(key("..."), "");
    }

    #[test]
    fn test_key_never_longer_than_word() {
        let words = [
            "a", "an", "eye", "to", "blue", "città", "strength", "rhythm", "l'amore",
            "beautiful", "sorrow", "ça", "x", "42", "don't",
        ];
        for word in words {
            let k = extract(word);
            assert!(k.as_str().chars().count() <= word.chars().count(), "{word} -> {k}");
            assert_eq!(k, extract(word));
        }
    }

    #[test]
    fn test_last_word_keeps_punctuation() {
        assert_eq!(last_word("  Roses are red,  "), "red,");
        assert_eq!(last_word(""), "");
        assert_eq!(extract_from_line("And so are you!").as_str(), "oo");
    }
}
