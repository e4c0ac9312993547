//! Core record types produced by the analyzer.
//!
//! Verses and stanzas are plain values: the parser builds them once and the
//! grouper returns new copies with the rhyme fields filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How two rhyme keys relate, ordered by specificity (`None` lowest).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RhymeRelation {
    /// No relation, or a rhyme group with a single member.
    #[default]
    #[serde(rename = "")]
    None,
    /// Trailing consonant clusters match, vowels differ.
    Consonance,
    /// Vowel sounds are similar but the endings are not identical.
    Assonance,
    /// Perfect rhyme.
    Rhyme,
}

impl RhymeRelation {
    /// Returns the serialized name of this relation (empty for `None`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rhyme => "rhyme",
            Self::Assonance => "assonance",
            Self::Consonance => "consonance",
            Self::None => "",
        }
    }

    /// True for anything but `None`.
    #[must_use]
    pub const fn is_related(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for RhymeRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heuristic token standing in for the perceived ending sound of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RhymeKey(pub String);

impl RhymeKey {
    /// Create a new `RhymeKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when extraction produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RhymeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RhymeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RhymeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RhymeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One line of a stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// 1-based position within the stanza.
    pub index: usize,
    /// Line text as written.
    pub text: String,
    /// Rhyme-group label (`A`, `B`, ..., `AA`); empty until grouped.
    pub rhyme_index: String,
    /// Rhyme key of the last word.
    pub rhyming_syllable: RhymeKey,
    /// Final relation reported for the verse's group.
    pub rhyme_type: RhymeRelation,
    /// Estimated syllable count.
    pub syllable_count: usize,
}

impl Verse {
    /// Create an ungrouped verse.
    pub fn new(
        index: usize,
        text: impl Into<String>,
        rhyming_syllable: RhymeKey,
        syllable_count: usize,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            rhyme_index: String::new(),
            rhyming_syllable,
            rhyme_type: RhymeRelation::None,
            syllable_count,
        }
    }

    /// Copy of this verse with its group label and relation set.
    #[must_use]
    pub fn grouped(&self, label: impl Into<String>, relation: RhymeRelation) -> Self {
        Self {
            rhyme_index: label.into(),
            rhyme_type: relation,
            ..self.clone()
        }
    }
}

/// A block of verses separated from its neighbours by blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stanza {
    /// 1-based position within the text.
    pub index: usize,
    /// Verses in input order.
    pub verses: Vec<Verse>,
    /// Concatenated verse labels, e.g. `ABAB`.
    pub rhyme_pattern: String,
}

impl Stanza {
    /// Sum of the verse syllable counts.
    pub fn total_syllables(&self) -> usize {
        self.verses.iter().map(|v| v.syllable_count).sum()
    }
}

/// Full analysis result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLyrics {
    /// Stanzas in input order.
    pub stanzas: Vec<Stanza>,
}

impl ParsedLyrics {
    /// Number of verses across all stanzas.
    pub fn verse_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.verses.len()).sum()
    }

    /// True when the input contained no verses.
    pub fn is_empty(&self) -> bool {
        self.stanzas.is_empty()
    }

    /// Rhyme pattern of every stanza, in order.
    pub fn patterns(&self) -> Vec<&str> {
        self.stanzas.iter().map(|s| s.rhyme_pattern.as_str()).collect()
    }
}
