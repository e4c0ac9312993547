//! Application constants.
//!
//! Centralizes magic numbers used by the heuristics and the report.

/// Rhyme-key extraction constants.
pub mod sound {
    /// Words shorter than this are used as their own rhyme key.
    pub const MIN_FALLBACK_LEN: usize = 3;

    /// Words at least this long fall back to their last three characters.
    pub const LONG_WORD_LEN: usize = 4;

    /// Tail length taken for short fallback keys.
    pub const SHORT_TAIL: usize = 2;

    /// Tail length taken for long fallback keys.
    pub const LONG_TAIL: usize = 3;
}

/// Rhyme-group label constants.
pub mod labels {
    /// Letters used for group labels, in discovery order.
    pub const ALPHABET: &[char] = &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
        'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];
}

/// Human-readable report constants.
pub mod report {
    /// Minimum width of the rhyme-key column.
    pub const KEY_COLUMN_WIDTH: usize = 6;

    /// Width of the relation column (`consonance` is the longest name).
    pub const RELATION_COLUMN_WIDTH: usize = 10;

    /// Placeholder shown for a singleton group's relation.
    pub const NO_RELATION: &str = "-";
}
