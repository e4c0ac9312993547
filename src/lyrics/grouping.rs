//! Rhyme-group assignment within a stanza.
//!
//! Single forward pass: each verse joins the group of the first earlier
//! verse it matches, scanning from the top of the stanza. The first match
//! wins even when a later verse would relate more strongly, so the labeling
//! depends on verse order.

use crate::constants::labels::ALPHABET;
use crate::types::{RhymeKey, RhymeRelation, Verse};

use super::classify::match_relation;

/// Labels, pattern and final relations for one stanza.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grouping {
    /// Group label of each verse, in verse order.
    pub labels: Vec<String>,
    /// Concatenated labels.
    pub pattern: String,
    /// Final relation of each verse's group, in verse order.
    pub relations: Vec<RhymeRelation>,
}

#[derive(Debug)]
struct RhymeGroup {
    label: String,
    members: Vec<usize>,
    relation: RhymeRelation,
}

/// Assign rhyme groups to a stanza given the rhyme key of each verse.
pub fn group(keys: &[RhymeKey]) -> Grouping {
    let mut groups: Vec<RhymeGroup> = Vec::new();
    // group index of each processed verse
    let mut membership: Vec<usize> = Vec::with_capacity(keys.len());

    for (i, key) in keys.iter().enumerate() {
        let found = keys[..i]
            .iter()
            .enumerate()
            .find_map(|(j, prev)| match_relation(key, prev).map(|r| (membership[j], r)));

        if let Some((g, relation)) = found {
            let group = &mut groups[g];
            tracing::trace!("verse {} joins {} as {relation:?}", i + 1, group.label);
            group.members.push(i);
            group.relation = upgrade(group.relation, relation);
            membership.push(g);
        } else {
            groups.push(RhymeGroup {
                label: label_for(groups.len()),
                members: vec![i],
                relation: RhymeRelation::None,
            });
            membership.push(groups.len() - 1);
        }
    }

    let labels: Vec<String> = membership.iter().map(|&g| groups[g].label.clone()).collect();
    let relations = membership.iter().map(|&g| final_relation(&groups[g])).collect();
    let pattern = labels.concat();

    Grouping { labels, pattern, relations }
}

/// Group a stanza's verses, returning regrouped copies and the pattern.
pub fn apply(verses: &[Verse]) -> (Vec<Verse>, String) {
    let keys: Vec<RhymeKey> = verses.iter().map(|v| v.rhyming_syllable.clone()).collect();
    let Grouping { labels, pattern, relations } = group(&keys);

    let grouped = verses
        .iter()
        .zip(labels)
        .zip(relations)
        .map(|((verse, label), relation)| verse.grouped(label, relation))
        .collect();

    (grouped, pattern)
}

/// Label for the `index`-th discovered group: `A`..`Z`, then `AA`, `AB`, ...
pub fn label_for(index: usize) -> String {
    let base = ALPHABET.len();
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(ALPHABET[n % base]);
        n /= base;
    }
    letters.iter().rev().collect()
}

/// Merge a join's relation into a group's running relation.
///
/// Rhyme is never downgraded; assonance and consonance only fill `None`.
const fn upgrade(current: RhymeRelation, incoming: RhymeRelation) -> RhymeRelation {
    match (current, incoming) {
        (RhymeRelation::Rhyme, _) | (_, RhymeRelation::Rhyme) => RhymeRelation::Rhyme,
        (RhymeRelation::None, other) => other,
        (kept, _) => kept,
    }
}

fn final_relation(group: &RhymeGroup) -> RhymeRelation {
    if group.members.len() == 1 {
        RhymeRelation::None
    } else {
        group.relation
    }
}
