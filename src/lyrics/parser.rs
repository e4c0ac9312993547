//! Stanza and verse splitting, and the per-stanza analysis pipeline.

use rayon::prelude::*;

use crate::types::{ParsedLyrics, Stanza, Verse};

use super::{grouping, sound, syllables};

/// Splits lyrics into stanzas and analyzes each one.
///
/// Stanzas are independent, so they can be analyzed in parallel; the result
/// keeps input order either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct LyricsParser {
    parallel: bool,
}

impl LyricsParser {
    /// Create a sequential parser.
    pub const fn new() -> Self {
        Self { parallel: false }
    }

    /// Analyze stanzas on the rayon thread pool.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse raw multi-stanza text.
    pub fn parse(&self, text: &str) -> ParsedLyrics {
        let blocks = split_stanzas(text);

        let stanzas: Vec<Stanza> = if self.parallel {
            blocks
                .par_iter()
                .enumerate()
                .map(|(i, lines)| analyze_stanza(i + 1, lines))
                .collect()
        } else {
            blocks
                .iter()
                .enumerate()
                .map(|(i, lines)| analyze_stanza(i + 1, lines))
                .collect()
        };

        tracing::debug!(
            "Parsed {} stanza(s), {} verse(s)",
            stanzas.len(),
            stanzas.iter().map(|s| s.verses.len()).sum::<usize>()
        );

        ParsedLyrics { stanzas }
    }
}

/// Split text into stanzas of non-blank lines.
///
/// Any whitespace-only line ends a stanza; runs of them, and blank lines at
/// either end, produce no empty stanzas.
pub fn split_stanzas(text: &str) -> Vec<Vec<&str>> {
    let mut stanzas = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }

    stanzas
}

/// Build, group and label the verses of one stanza.
pub fn analyze_stanza(index: usize, lines: &[&str]) -> Stanza {
    let verses: Vec<Verse> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Verse::new(i + 1, *line, sound::extract_from_line(line), syllables::count(line))
        })
        .collect();

    let (verses, rhyme_pattern) = grouping::apply(&verses);
    tracing::debug!("Stanza {index}: {rhyme_pattern}");

    Stanza { index, verses, rhyme_pattern }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_split_on_blank_lines() {
        let text = "\n\none\ntwo\n \t\n\nthree\n\n";
        assert_eq!(split_stanzas(text), vec![vec!["one", "two"], vec!["three"]]);
    }

    #[test]
    fn test_split_handles_crlf() {
        let text = "one\r\ntwo\r\n\r\nthree\r\n";
        assert_eq!(split_stanzas(text), vec![vec!["one", "two"], vec!["three"]]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_stanzas("").is_empty());
        assert!(split_stanzas("  \n\n\t\n").is_empty());
    }

    #[test]
    fn test_analyze_stanza_indexes_from_one() {
        let stanza = analyze_stanza(3, &["I see the light", "shining so bright"]);
        assert_eq!(stanza.index, 3);
        assert_eq!(stanza.verses[0].index, 1);
        assert_eq!(stanza.verses[1].index, 2);
        assert_eq!(stanza.rhyme_pattern, "AA");
        assert_eq!(stanza.verses[1].rhyming_syllable.as_str(), "ight");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "a day\nthe way\n\nthe night\nso bright\nalone\n\nla amica\nla vita";
        let sequential = LyricsParser::new().parse(text);
        let parallel = LyricsParser::new().with_parallel(true).parse(text);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.patterns(), vec!["AA", "AAB", "AB"]);
    }
}
