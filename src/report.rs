//! Output rendering for analysis results.
//!
//! Produces either the human-readable per-stanza report or JSON.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::constants::report::{KEY_COLUMN_WIDTH, NO_RELATION, RELATION_COLUMN_WIDTH};
use crate::error::Result;
use crate::types::{ParsedLyrics, Stanza};

/// Serialize the analysis as JSON.
pub fn to_json(parsed: &ParsedLyrics, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(parsed)?
    } else {
        serde_json::to_string(parsed)?
    };
    Ok(json)
}

/// Render the human-readable report, optionally headed by a title.
pub fn render(parsed: &ParsedLyrics, title: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "=".repeat(title.width()));
        out.push('\n');
    }

    if parsed.is_empty() {
        out.push_str("(no verses)\n");
        return out;
    }

    for (i, stanza) in parsed.stanzas.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_stanza(&mut out, stanza);
    }

    let _ = writeln!(
        out,
        "\n{} stanza(s), {} verse(s)",
        parsed.stanzas.len(),
        parsed.verse_count()
    );
    out
}

fn render_stanza(out: &mut String, stanza: &Stanza) {
    let _ = writeln!(
        out,
        "Stanza {}  [{}]  {} syllable(s)",
        stanza.index,
        stanza.rhyme_pattern,
        stanza.total_syllables()
    );

    let index_width = digits(stanza.verses.len());
    let label_width = stanza.verses.iter().map(|v| v.rhyme_index.width()).max().unwrap_or(1);
    let count_width = stanza
        .verses
        .iter()
        .map(|v| digits(v.syllable_count))
        .max()
        .unwrap_or(1);
    let key_width = stanza
        .verses
        .iter()
        .map(|v| v.rhyming_syllable.as_str().width())
        .max()
        .unwrap_or(0)
        .max(KEY_COLUMN_WIDTH);

    for verse in &stanza.verses {
        let relation =
            if verse.rhyme_type.is_related() { verse.rhyme_type.name() } else { NO_RELATION };
        let _ = writeln!(
            out,
            "  {:>index_width$}  {}  {:>count_width$}  {}  {}  {}",
            verse.index,
            pad(&verse.rhyme_index, label_width),
            verse.syllable_count,
            pad(verse.rhyming_syllable.as_str(), key_width),
            pad(relation, RELATION_COLUMN_WIDTH),
            verse.text.trim(),
        );
    }
}

/// Left-align `s` to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

const fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
