//! Redundant candidate removal.
//!
//! Among candidates with the same two-character ending, a shorter word that
//! is a literal suffix of an already accepted one carries no information of
//! its own. Sorting by tail tag puts comparable candidates next to each
//! other, so each candidate only needs to be checked against the accepted
//! entries of its own run.

use std::cmp::Reverse;

use crate::expand::Candidate;

/// The last two code points of `text`, in order.
fn tail_tag(text: &str) -> String {
    let mut tail: Vec<char> = text.chars().rev().take(2).collect();
    tail.reverse();
    tail.into_iter().collect()
}

/// Drop candidates that are trailing substrings of a longer accepted one.
///
/// Candidates are walked by tail tag, highest frequency and longest first.
/// Each survivor is pushed to the front of the result, so the most recently
/// accepted entries are the ones a later candidate is compared against.
#[tracing::instrument(skip_all, fields(candidates = candidates.len()))]
pub fn strip_redundants(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut tagged: Vec<(String, Candidate)> = candidates
        .into_iter()
        .map(|candidate| (tail_tag(&candidate.text), candidate))
        .collect();
    tagged.sort_by_cached_key(|(tag, candidate)| {
        (
            tag.clone(),
            Reverse(candidate.frequency),
            Reverse(candidate.len()),
            candidate.text.clone(),
        )
    });

    // Kept newest first; reversed once at the end instead of inserting at 0.
    let mut accepted: Vec<Candidate> = Vec::with_capacity(tagged.len());
    let mut run_tag: Option<String> = None;
    let mut run = 0usize;

    for (tag, candidate) in tagged {
        if run_tag.as_deref() != Some(tag.as_str()) {
            run_tag = Some(tag);
            run = 0;
        }
        run += 1;

        let window = run.min(accepted.len());
        let redundant = accepted
            .iter()
            .rev()
            .take(window)
            .any(|kept| kept.text.ends_with(candidate.text.as_str()));
        if redundant {
            tracing::trace!(word = %candidate.text, "dropped redundant candidate");
            continue;
        }
        accepted.push(candidate);
    }

    accepted.reverse();
    accepted
}
