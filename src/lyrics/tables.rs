//! Static lookup data for the rhyme and syllable heuristics.
//!
//! Every table here is fixed at compile time (or built once on first use) and
//! only ever read. English and Italian entries share the same tables; the
//! heuristics pick a language implicitly by whichever entry matches.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Vowels used by rhyme keys and elision (accented Italian vowels included).
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'à', 'è', 'ì', 'ò', 'ù', 'á', 'é', 'í', 'ó', 'ú',
];

/// Check if a char is a vowel for rhyme and elision purposes.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check if a char opens a vowel run when counting syllables (`y` included).
pub fn is_syllable_vowel(c: char) -> bool {
    c == 'y' || is_vowel(c)
}

/// Ordered suffix rules; the first suffix a word ends with becomes its key.
pub const SUFFIXES: &[&str] = &[
    "ing", "tion", "ness", "ful", "less", "ly", "ed", "er", "est", "ize", "ise",
    "ous", "able", "ible", "ight", "ar", "igh",
];

/// Near-homophonous endings that count as a full rhyme.
pub const PERFECT_RHYME_GROUPS: &[&[&str]] = &[
    &["ar", "are"],
    &["ay", "ey", "ai", "eigh"],
    &["igh", "y", "ie", "ky", "i"],
    &["ow", "ou"],
    &["oo", "ue", "ew", "u"],
    &["ee", "ea"],
    &["ight", "ite"],
    &["ore", "oor", "our"],
    &["ed", "ead"],
    &["ing", "in"],
    // Italian stressed/unstressed vowel endings
    &["a", "à"],
    &["e", "è", "é"],
    &["i", "ì"],
    &["u", "ù"],
    &["ore", "uore"],
];

/// Endings that only share their vowel sound.
pub const ASSONANCE_GROUPS: &[&[&str]] = &[
    &["o", "ò", "io", "eo", "ao"],
    &["ico", "ito"],
    &["ic", "kee"],
];

/// Vowel-only skeletons that sound alike.
pub const VOWEL_SIMILARITY_GROUPS: &[&[&str]] = &[
    &["o", "ao", "eo", "io"],
    &["i", "ai", "ei"],
    &["e", "ee", "ie"],
    &["a", "ia", "ua"],
];

/// Italian function words after which a following vowel elides.
pub const ELISION_FUNCTION_WORDS: &[&str] = &["che", "come", "dove", "non", "con", "per"];

/// Hiatus pairs: adjacent vowels that still form two syllables.
pub const HIATUS_PAIRS: &[(char, char)] = &[
    ('i', 'a'), ('i', 'e'), ('i', 'o'),
    ('u', 'a'), ('u', 'e'), ('u', 'i'),
    ('a', 'i'), ('e', 'i'), ('o', 'i'),
];

/// English endings where a final `e` is silent.
pub const SILENT_E_PATTERNS: &[&str] = &[
    r"[aeiouy][kz]e$",
    r"[aiouy]fe$",
    r"[aiouy]pe$",
    r"[aiouy]me$",
    r"[aiouy]te$",
    r"[aiouy]de$",
    r"[aiouy]ve$",
    r"[aiouy]se$",
    r"[aiouy]ne$",
    r"[aiouy]le$",
    r"[aeiou]ce$",
    r"[aeiou]ge$",
    r"(?:dg|nc|ns|lv|rv|rg|th)e$",
    r"[aeiou]{2}[bcdfgklmnpstvz]e$",
];

/// Italian words whose spelling hits a silent-e pattern but whose final `e`
/// is a full syllable. Checked before the patterns.
pub const ITALIAN_FINAL_E: &[&str] = &[
    "sole", "cane", "pane", "luce", "voce", "pace", "croce", "noce", "nave", "vive", "male",
    "sale", "vole", "scuole", "parole", "fine", "vite", "rose", "cose", "nome", "lume", "fiume",
    "fune", "lune",
];

lazy_static! {
    /// Words whose rhyme key cannot be derived from their spelling.
    pub static ref SOUND_EXCEPTIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // English
        m.insert("high", "igh");
        m.insert("sigh", "igh");
        m.insert("thigh", "igh");
        m.insert("nigh", "igh");
        m.insert("eye", "igh");
        m.insert("my", "y");
        m.insert("by", "y");
        m.insert("die", "ie");
        m.insert("lie", "ie");
        m.insert("star", "ar");
        m.insert("far", "ar");
        m.insert("car", "ar");
        m.insert("are", "are");
        m.insert("heart", "art");
        m.insert("weigh", "eigh");
        m.insert("eight", "eigh");
        m.insert("you", "oo");
        m.insert("through", "oo");
        m.insert("do", "oo");
        m.insert("to", "oo");
        m.insert("too", "oo");
        m.insert("two", "oo");
        m.insert("who", "oo");
        m.insert("blue", "ue");
        m.insert("true", "ue");
        m.insert("said", "ed");
        m.insert("bread", "ed");
        m.insert("head", "ed");
        m.insert("dead", "ed");
        // Italian
        m.insert("amore", "ore");
        m.insert("cuore", "ore");
        m.insert("fiore", "ore");
        m.insert("perché", "é");
        m.insert("città", "à");
        m.insert("più", "ù");
        m.insert("così", "ì");
        m.insert("mai", "ai");
        m.insert("sei", "ei");
        m
    };

    /// Syllable counts for words the vowel-run heuristic gets wrong.
    pub static ref SYLLABLE_EXCEPTIONS: HashMap<&'static str, usize> = {
        let mut m = HashMap::new();
        // English function words and overrides
        m.insert("the", 1);
        m.insert("a", 1);
        m.insert("an", 1);
        m.insert("and", 1);
        m.insert("are", 1);
        m.insert("were", 1);
        m.insert("where", 1);
        m.insert("there", 1);
        m.insert("here", 1);
        m.insert("more", 1);
        m.insert("sure", 1);
        m.insert("fire", 1);
        m.insert("care", 1);
        m.insert("you", 1);
        m.insert("your", 1);
        m.insert("said", 1);
        m.insert("their", 1);
        m.insert("rain", 1);
        m.insert("again", 2);
        m.insert("quiet", 2);
        m.insert("people", 2);
        // Italian function words and synaeresis
        m.insert("che", 1);
        m.insert("e", 1);
        m.insert("è", 1);
        m.insert("il", 1);
        m.insert("la", 1);
        m.insert("di", 1);
        m.insert("io", 1);
        m.insert("mio", 1);
        m.insert("mia", 1);
        m.insert("tuo", 1);
        m.insert("tua", 1);
        m.insert("suo", 1);
        m.insert("sua", 1);
        m.insert("qui", 1);
        m.insert("qua", 1);
        m.insert("quando", 2);
        m.insert("quanto", 2);
        m.insert("questo", 2);
        m.insert("quello", 2);
        m.insert("poi", 1);
        m.insert("lui", 1);
        m.insert("cui", 1);
        m.insert("più", 1);
        m.insert("può", 1);
        m.insert("già", 1);
        m.insert("giù", 1);
        m.insert("sei", 1);
        m.insert("mai", 1);
        m.insert("noi", 1);
        m.insert("voi", 1);
        m.insert("lei", 1);
        m.insert("vuoi", 1);
        m
    };
}

/// True when both strings appear together in one group of `groups`.
pub fn co_members(groups: &[&[&str]], a: &str, b: &str) -> bool {
    groups
        .iter()
        .any(|group| group.iter().any(|m| *m == a) && group.iter().any(|m| *m == b))
}
