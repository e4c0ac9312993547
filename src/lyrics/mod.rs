//! Lyrics analysis: stanza splitting, syllable counting and rhyme schemes.
//!
//! Pipeline per stanza:
//! - `sound`: rhyme key of each verse's last word
//! - `syllables` (with `elision`): syllable count of each verse
//! - `grouping`: pairwise `classify` judgments turned into group labels
//!
//! `parser` drives the pipeline; `tables` holds the fixed heuristic data.

pub mod classify;
pub mod elision;
pub mod grouping;
pub mod parser;
pub mod sound;
pub mod syllables;
pub mod tables;

pub use classify::{classify, match_relation, rhymes};
pub use grouping::{group, Grouping};
pub use parser::LyricsParser;
pub use sound::extract;
pub use syllables::count;

use crate::types::ParsedLyrics;

/// Analyze raw multi-stanza text sequentially.
pub fn parse(text: &str) -> ParsedLyrics {
    LyricsParser::new().parse(text)
}
