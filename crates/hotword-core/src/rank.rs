//! Final ordering of hot words.

use crate::expand::Candidate;

/// Order candidates and keep the `top_k` most significant.
///
/// Significance is frequency, then length in code points, then code point
/// order of the text. The result starts with the most significant word. A
/// `top_k` of zero keeps everything.
pub fn rank(mut candidates: Vec<Candidate>, top_k: usize) -> Vec<Candidate> {
    candidates.sort_by_cached_key(|c| (c.frequency, c.len(), c.text.clone()));

    let keep = if top_k == 0 {
        candidates.len()
    } else {
        top_k.min(candidates.len())
    };
    let offset = candidates.len() - keep;
    let mut ranked = candidates.split_off(offset);
    ranked.reverse();
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Candidate> {
        vec![
            Candidate::new("明月", 3),
            Candidate::new("春风", 5),
            Candidate::new("故乡", 3),
            Candidate::new("白日依山", 3),
        ]
    }

    #[test]
    fn top_one_is_most_frequent() {
        let ranked = rank(sample(), 1);
        assert_eq!(ranked, vec![Candidate::new("春风", 5)]);
    }

    #[test]
    fn zero_keeps_everything() {
        assert_eq!(rank(sample(), 0).len(), 4);
    }

    #[test]
    fn top_k_larger_than_input_keeps_everything() {
        assert_eq!(rank(sample(), 10).len(), 4);
    }

    #[test]
    fn ties_break_on_length_then_text() {
        let ranked = rank(sample(), 0);
        let texts: Vec<&str> = ranked.iter().map(|c| c.text.as_str()).collect();
        // 明 (U+660E) sorts after 故 (U+6545).
        assert_eq!(texts, vec!["春风", "白日依山", "明月", "故乡"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new(), 3).is_empty());
    }
}
