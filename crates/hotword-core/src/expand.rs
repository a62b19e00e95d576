//! Suffix expansion of scope lists into repeated substrings.
//!
//! Expansion is a lazily built trie: scopes that share a prefix are grouped
//! on their next character and the search recurses while a branch is shared
//! by more than one scope. A prefix is emitted once for every scope that
//! runs out (or hits a non-qualifying character) and once for every branch
//! that is no longer shared.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::charset::CharFilter;
use crate::scope::ScopeIndex;

/// A repeated substring and the number of times it was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The substring, at least two code points long.
    pub text: String,
    /// Number of independent emissions across all expansion branches.
    pub frequency: usize,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(text: impl Into<String>, frequency: usize) -> Self {
        Self {
            text: text.into(),
            frequency,
        }
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Scopes regrouped on their first character.
#[derive(Debug, Default)]
pub(crate) struct Continuations<'a> {
    /// Groups in first-seen order; each holds the scopes minus their first character.
    pub groups: Vec<(char, Vec<&'a [char]>)>,
    /// Scopes that were empty or started with a non-qualifying character.
    pub terminated: usize,
}

/// Group `scopes` by their next character.
pub(crate) fn group_by_next<'a>(scopes: &[&'a [char]], filter: &CharFilter) -> Continuations<'a> {
    let mut continuations = Continuations::default();
    let mut slots: HashMap<char, usize> = HashMap::new();

    for &scope in scopes {
        let Some((&c, tail)) = scope.split_first() else {
            continuations.terminated += 1;
            continue;
        };
        if !filter.qualifies(c) {
            continuations.terminated += 1;
            continue;
        }
        let slot = *slots.entry(c).or_insert_with(|| {
            continuations.groups.push((c, Vec::new()));
            continuations.groups.len() - 1
        });
        continuations.groups[slot].1.push(tail);
    }

    continuations
}

/// Expand `scopes`, which all follow `prefix`, pushing every emitted word into `out`.
///
/// Only prefixes of two or more code points are ever emitted. Recursion
/// depth is bounded by the longest scope.
pub fn expand(scopes: &[&[char]], prefix: &[char], filter: &CharFilter, out: &mut Vec<String>) {
    let continuations = group_by_next(scopes, filter);
    let emits = prefix.len() >= 2;

    if emits {
        for _ in 0..continuations.terminated {
            out.push(prefix.iter().collect());
        }
    }

    for (c, tails) in continuations.groups {
        if tails.len() == 1 && prefix.len() > 1 {
            out.push(prefix.iter().collect());
            continue;
        }
        let mut next = Vec::with_capacity(prefix.len() + 1);
        next.extend_from_slice(prefix);
        next.push(c);
        expand(&tails, &next, filter, out);
    }
}

/// Expand every entry of `index` and count emissions per distinct word.
///
/// Words emitted only once are dropped. The result is ordered by text.
#[tracing::instrument(skip_all, fields(characters = index.len()))]
pub fn collect_candidates(index: &ScopeIndex<'_>, filter: &CharFilter) -> Vec<Candidate> {
    let mut emitted = Vec::new();
    for entry in index.entries() {
        expand(&entry.scopes, &[entry.character], filter, &mut emitted);
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for word in emitted {
        *counts.entry(word).or_insert(0) += 1;
    }

    let candidates: Vec<Candidate> = counts
        .into_iter()
        .filter(|&(_, frequency)| frequency > 1)
        .map(|(text, frequency)| Candidate { text, frequency })
        .collect();
    tracing::debug!(candidates = candidates.len(), "candidates collected");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(scopes: &[&str], prefix: &str) -> Vec<String> {
        let owned: Vec<Vec<char>> = scopes.iter().map(|s| chars(s)).collect();
        let slices: Vec<&[char]> = owned.iter().map(Vec::as_slice).collect();
        let mut out = Vec::new();
        expand(&slices, &chars(prefix), &CharFilter::default(), &mut out);
        out.sort();
        out
    }

    #[test]
    fn single_character_prefix_is_never_emitted() {
        assert!(run(&["", "", "，"], "春").is_empty());
    }

    #[test]
    fn exhausted_scopes_emit_prefix() {
        assert_eq!(run(&["", "", "，x"], "春风"), vec!["春风"; 3]);
    }

    #[test]
    fn unique_branch_stops_expansion() {
        // Both scopes diverge after 风, so 春风 is emitted once per branch.
        assert_eq!(run(&["风雨", "风月"], "春"), vec!["春风", "春风"]);
    }

    #[test]
    fn shared_branch_extends_prefix() {
        assert_eq!(
            run(&["风又绿", "风又绿", "风又"], "春"),
            vec!["春风又", "春风又绿", "春风又绿"]
        );
    }

    #[test]
    fn unique_continuation_from_root_reaches_two_characters() {
        // A lone scope still grows the one-character root before stopping.
        assert_eq!(run(&["风雨"], "春"), vec!["春风"]);
    }

    #[test]
    fn grouping_skips_non_qualifying_starts() {
        let owned = [chars("a风"), chars("风"), chars("")];
        let slices: Vec<&[char]> = owned.iter().map(Vec::as_slice).collect();
        let continuations = group_by_next(&slices, &CharFilter::default());
        assert_eq!(continuations.terminated, 2);
        assert_eq!(continuations.groups.len(), 1);
        assert_eq!(continuations.groups[0].0, '风');
    }

    #[test]
    fn collect_drops_single_emissions() {
        let buffer = chars("你好，你好，你好，你好，你好，");
        let filter = CharFilter::default();
        let mut index = ScopeIndex::build(&buffer, 4, &filter);
        index.retain_hot(&filter);
        let candidates = collect_candidates(&index, &filter);
        assert_eq!(candidates, vec![Candidate::new("你好", 5)]);
    }

    #[test]
    fn candidate_length_counts_code_points() {
        assert_eq!(Candidate::new("春风", 2).len(), 2);
    }
}
