//! Hot-word mining pipeline.
//!
//! scope index → suffix expansion → redundancy stripping → ranking.

use serde::{Deserialize, Serialize};

use crate::charset::CharFilter;
use crate::error::{MiningError, MiningResult};
use crate::expand::{self, Candidate};
use crate::rank;
use crate::scope::ScopeIndex;
use crate::strip;
use crate::timing::StageTimer;

/// Default scope length in code points.
pub const DEFAULT_SEARCH_DEPTH: usize = 10;

/// Largest accepted scope length. Expansion recurses once per scope character.
pub const MAX_SEARCH_DEPTH: usize = 512;

/// Reject a zero depth or one past [`MAX_SEARCH_DEPTH`].
pub fn check_depth(depth: usize) -> MiningResult<()> {
    if (1..=MAX_SEARCH_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(MiningError::InvalidDepth(depth))
    }
}

/// Parameters for [`mine_hotwords`].
#[derive(Debug, Clone)]
pub struct MiningOptions {
    /// Scope length in code points, from 1 to [`MAX_SEARCH_DEPTH`].
    pub depth: usize,
    /// Maximum number of words returned; zero returns all.
    pub top_k: usize,
    /// Qualification rules for characters.
    pub filter: CharFilter,
}

impl Default for MiningOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            top_k: 0,
            filter: CharFilter::default(),
        }
    }
}

/// Ranked hot words of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotwordReport {
    /// Scope length the text was mined with.
    pub depth: usize,
    /// Requested result limit (zero means unlimited).
    pub top_k: usize,
    /// Number of candidates left after redundancy stripping.
    pub total_candidates: usize,
    /// Words, most significant first.
    pub words: Vec<Candidate>,
}

/// Mine the hot words of `text`.
///
/// Empty text, or text without any repeated phrase, yields an empty report.
#[tracing::instrument(skip(text, options, timer), fields(text_len = text.len(), depth = options.depth, top_k = options.top_k))]
pub fn mine_hotwords(
    text: &str,
    options: &MiningOptions,
    timer: &mut StageTimer,
) -> MiningResult<HotwordReport> {
    check_depth(options.depth)?;

    let buffer: Vec<char> = text.chars().collect();
    let mut index = ScopeIndex::build(&buffer, options.depth, &options.filter);
    timer.lap("char");

    index.retain_hot(&options.filter);
    timer.lap("char-filter");

    let candidates = expand::collect_candidates(&index, &options.filter);
    timer.lap("search-hotword");

    let candidates = strip::strip_redundants(candidates);
    timer.lap("strip-redundants");

    let total_candidates = candidates.len();
    let words = rank::rank(candidates, options.top_k);
    timer.lap("sort");

    tracing::debug!(total_candidates, returned = words.len(), "hot words mined");
    Ok(HotwordReport {
        depth: options.depth,
        top_k: options.top_k,
        total_candidates,
        words,
    })
}
