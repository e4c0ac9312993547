//! `verseflow` - stanza, syllable and rhyme-scheme analysis for lyrics.
//!
//! Splits text into stanzas and verses, estimates syllables per verse (with
//! Italian elision), and labels each verse with a rhyme group to produce a
//! per-stanza pattern such as `ABAB`.


// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lyrics;
pub mod report;
pub mod types;

pub use lyrics::{parse, LyricsParser};
pub use types::{ParsedLyrics, RhymeKey, RhymeRelation, Stanza, Verse};
