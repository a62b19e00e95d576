//! Character qualification rules shared by mining and graph building.

/// Punctuation and filler characters that never start or extend a hot word.
pub const DEFAULT_EXCLUDES: &str = "。，；：…（）《》？！、“”—[]【】°的个";

/// Common function characters that are never used as a mining root.
pub const DEFAULT_STOP_CHARS: &str = "了是在和";

/// Decides which code points take part in hot-word expansion.
///
/// A character qualifies when it is outside ASCII and not in the exclusion
/// set. The stop-list only applies to root characters in hot-word mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharFilter {
    excludes: Vec<char>,
    stop_chars: Vec<char>,
}

impl Default for CharFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES, DEFAULT_STOP_CHARS)
    }
}

impl CharFilter {
    /// Build a filter from an exclusion string and a stop-list string.
    pub fn new(excludes: &str, stop_chars: &str) -> Self {
        let mut excludes: Vec<char> = excludes.chars().collect();
        excludes.sort_unstable();
        excludes.dedup();
        let mut stop_chars: Vec<char> = stop_chars.chars().collect();
        stop_chars.sort_unstable();
        stop_chars.dedup();
        Self {
            excludes,
            stop_chars,
        }
    }

    /// Build a filter from optional overrides, falling back to the defaults.
    pub fn from_overrides(excludes: Option<&str>, stop_chars: Option<&str>) -> Self {
        Self::new(
            excludes.unwrap_or(DEFAULT_EXCLUDES),
            stop_chars.unwrap_or(DEFAULT_STOP_CHARS),
        )
    }

    /// Whether `c` may start a scope or continue an expansion.
    pub fn qualifies(&self, c: char) -> bool {
        !c.is_ascii() && self.excludes.binary_search(&c).is_err()
    }

    /// Whether `c` is on the root stop-list.
    pub fn is_stop_char(&self, c: char) -> bool {
        self.stop_chars.binary_search(&c).is_ok()
    }
}
