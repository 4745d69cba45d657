//! Vocabulary-wide character statistics.

use super::ChainGraph;
use crate::Entity;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharStats {
    /// Entity count per group tag.
    pub group_counts: BTreeMap<u32, usize>,
    /// Distinct (normalized) first characters, sorted.
    pub starting_chars: Vec<char>,
    /// Distinct raw last characters, sorted.
    pub ending_chars: Vec<char>,
    /// Last characters no entity starts with, sorted.
    ///
    /// Compared raw: an ending of `리` is listed even though `이...` entities may follow it.
    pub unmatched_endings: Vec<char>,
    /// Most common first characters with their counts, most frequent first.
    pub common_starts: Vec<(char, usize)>,
    /// Most common last characters with their counts, most frequent first.
    pub common_endings: Vec<(char, usize)>,
}

/// Collects [`CharStats`], keeping the `top` most common starting and ending characters.
pub fn char_stats(g: &ChainGraph, top: usize) -> CharStats {
    let mut group_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for e in g.entities() {
        *group_counts.entry(e.group()).or_insert(0) += 1;
    }

    let starting_chars = g.starting_chars();
    let ending_chars = g.ending_chars();
    let unmatched_endings = ending_chars
        .iter()
        .copied()
        .filter(|c| starting_chars.binary_search(c).is_err())
        .collect();

    let common_starts = most_common(&starting_chars, |c| g.starting_with(c).len(), top);
    let common_endings = most_common(&ending_chars, |c| g.ending_with(c).len(), top);

    CharStats {
        group_counts,
        starting_chars,
        ending_chars,
        unmatched_endings,
        common_starts,
        common_endings,
    }
}

/// Entities that may follow themselves, in load order.
pub fn self_chaining(g: &ChainGraph) -> Vec<&Entity> {
    g.entities()
        .iter()
        .filter(|e| e.is_self_chaining())
        .collect()
}

fn most_common(keys: &[char], count: impl Fn(char) -> usize, top: usize) -> Vec<(char, usize)> {
    let mut out: Vec<(char, usize)> = keys.iter().map(|&c| (c, count(c))).collect();
    // `keys` is sorted, so the stable sort breaks count ties by character.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out.truncate(top);
    out
}
