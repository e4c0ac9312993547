//! Rhyme classification between two rhyme keys.
//!
//! Two profiles:
//! - [`rhymes`] is the broad test: equal keys, a shared broad rhyme group,
//!   or similar vowel skeletons.
//! - [`classify`] reports the kind of relation: rhyme, assonance, consonance
//!   or none, in that order of preference.
//!
//! Both are symmetric and total; an empty key never relates to anything.

use crate::types::{RhymeKey, RhymeRelation};

use super::tables::{
    co_members, is_vowel, ASSONANCE_GROUPS, PERFECT_RHYME_GROUPS, VOWEL_SIMILARITY_GROUPS,
};

/// Broad, assonance-inclusive test: do these endings rhyme at all?
pub fn rhymes(a: &RhymeKey, b: &RhymeKey) -> bool {
    let (a, b) = (a.as_str(), b.as_str());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b
        || co_members(PERFECT_RHYME_GROUPS, a, b)
        || co_members(ASSONANCE_GROUPS, a, b)
        || vowels_assonant(a, b)
}

/// Typed relation between two keys.
pub fn classify(a: &RhymeKey, b: &RhymeKey) -> RhymeRelation {
    let (a, b) = (a.as_str(), b.as_str());
    if a.is_empty() || b.is_empty() {
        return RhymeRelation::None;
    }
    if a == b || co_members(PERFECT_RHYME_GROUPS, a, b) {
        return RhymeRelation::Rhyme;
    }
    if co_members(ASSONANCE_GROUPS, a, b) {
        return RhymeRelation::Assonance;
    }
    let tail = consonant_tail(a);
    if !tail.is_empty() && tail == consonant_tail(b) {
        return RhymeRelation::Consonance;
    }
    RhymeRelation::None
}

/// Relation under which a verse may join another verse's rhyme group.
///
/// Identical keys always match as a rhyme. Otherwise the pair has to pass
/// the broad test and still earn a typed relation, which keeps a shared
/// vowel alone (`ed`/`et`) from grouping lines.
pub fn match_relation(a: &RhymeKey, b: &RhymeKey) -> Option<RhymeRelation> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if a == b {
        return Some(RhymeRelation::Rhyme);
    }
    if !rhymes(a, b) {
        return None;
    }
    Some(classify(a, b)).filter(|r| r.is_related())
}

/// Vowel-skeleton assonance check backing the broad test.
fn vowels_assonant(a: &str, b: &str) -> bool {
    let (va, vb) = (vowel_skeleton(a), vowel_skeleton(b));
    if va.is_empty() || vb.is_empty() {
        return false;
    }
    va == vb || co_members(VOWEL_SIMILARITY_GROUPS, &va, &vb)
}

fn vowel_skeleton(key: &str) -> String {
    key.chars().filter(|c| is_vowel(*c)).collect()
}

/// Trailing run of consonants, e.g. `ng` for `ing`.
fn consonant_tail(key: &str) -> &str {
    let start = key
        .char_indices()
        .rev()
        .take_while(|(_, c)| !is_vowel(*c))
        .last()
        .map_or(key.len(), |(i, _)| i);
    &key[start..]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn k(s: &str) -> RhymeKey {
        RhymeKey::from(s)
    }

    #[test]
    fn test_empty_keys_never_relate() {
        assert!(!rhymes(&k(""), &k("")));
        assert!(!rhymes(&k("ar"), &k("")));
        assert_eq!(classify(&k(""), &k("ar")), RhymeRelation::None);
        assert_eq!(match_relation(&k(""), &k("")), None);
    }

    #[test]
    fn test_broad_groups() {
        assert!(rhymes(&k("ar"), &k("are")));
        assert!(rhymes(&k("ay"), &k("eigh")));
        assert!(rhymes(&k("igh"), &k("ky")));
        assert!(rhymes(&k("ow"), &k("ou")));
        assert!(rhymes(&k("ico"), &k("ito")));
        assert!(rhymes(&k("ic"), &k("kee")));
        assert!(!rhymes(&k("ing"), &k("ow")));
    }

    #[test]
    fn test_vowel_skeletons() {
        // "o" and "io" share a similarity group
        assert!(rhymes(&k("lo"), &k("rio")));
        assert!(rhymes(&k("ed"), &k("et")));
        assert!(!rhymes(&k("ed"), &k("ut")));
        // no vowels at all
        assert!(!rhymes(&k("ky"), &k("th")));
    }

    #[test]
    fn test_typed_order() {
        assert_eq!(classify(&k("ing"), &k("ing")), RhymeRelation::Rhyme);
        assert_eq!(classify(&k("oo"), &k("ue")), RhymeRelation::Rhyme);
        assert_eq!(classify(&k("io"), &k("o")), RhymeRelation::Assonance);
        assert_eq!(classify(&k("ico"), &k("ito")), RhymeRelation::Assonance);
        assert_eq!(classify(&k("ing"), &k("ong")), RhymeRelation::Consonance);
        assert_eq!(classify(&k("ed"), &k("et")), RhymeRelation::None);
    }

    #[test]
    fn test_consonant_tail() {
        assert_eq!(consonant_tail("ing"), "ng");
        assert_eq!(consonant_tail("oo"), "");
        assert_eq!(consonant_tail("thm"), "thm");
        assert_eq!(consonant_tail("è"), "");
    }

    #[test]
    fn test_symmetry() {
        let keys = [
            "", "ar", "are", "ay", "ey", "ed", "et", "io", "o", "ico", "ito", "ing", "ong", "oo",
            "ue", "ky", "à", "a",
        ];
        for a in keys {
            for b in keys {
                assert_eq!(rhymes(&k(a), &k(b)), rhymes(&k(b), &k(a)), "{a}/{b}");
                assert_eq!(classify(&k(a), &k(b)), classify(&k(b), &k(a)), "{a}/{b}");
                assert_eq!(match_relation(&k(a), &k(b)), match_relation(&k(b), &k(a)), "{a}/{b}");
            }
        }
    }

    #[test]
    fn test_match_relation_needs_both_profiles() {
        assert_eq!(match_relation(&k("oo"), &k("oo")), Some(RhymeRelation::Rhyme));
        assert_eq!(match_relation(&k("ue"), &k("oo")), Some(RhymeRelation::Rhyme));
        assert_eq!(match_relation(&k("io"), &k("o")), Some(RhymeRelation::Assonance));
        // broad only
        assert_eq!(match_relation(&k("ed"), &k("et")), None);
        // typed only: shared "ng" but different vowels
        assert_eq!(match_relation(&k("ing"), &k("ong")), None);
        // both: "eed"/"ed" share the vowel skeleton family and the tail
        assert_eq!(match_relation(&k("eed"), &k("ed")), Some(RhymeRelation::Consonance));
    }
}
