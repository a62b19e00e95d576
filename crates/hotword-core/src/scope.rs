//! Per-character scope index.
//!
//! For every qualifying character in a buffer, the index keeps the slice of
//! up to `depth` code points that follows each of its occurrences. These
//! slices ("scopes") are the raw material for both hot-word expansion and
//! association-tree building.

use std::collections::HashMap;

use crate::charset::CharFilter;

/// Occurrences below or at this count cannot form a hot phrase.
const MIN_HOT_OCCURRENCES: usize = 2;

/// All scopes recorded for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry<'a> {
    /// The character whose occurrences were recorded.
    pub character: char,
    /// The lookahead following each occurrence, in buffer order.
    pub scopes: Vec<&'a [char]>,
}

impl ScopeEntry<'_> {
    /// Number of times the character occurred.
    pub fn occurrence_count(&self) -> usize {
        self.scopes.len()
    }
}

/// Scope entries keyed by character, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct ScopeIndex<'a> {
    entries: Vec<ScopeEntry<'a>>,
    positions: HashMap<char, usize>,
}

impl<'a> ScopeIndex<'a> {
    /// Index `buffer` in one forward pass.
    ///
    /// Each qualifying character records the next `depth` code points as a
    /// scope without consuming them, so every following character is still
    /// visited. Near the end of the buffer the scope is the shorter
    /// remainder, possibly empty.
    #[tracing::instrument(skip_all, fields(buffer_len = buffer.len(), depth = depth))]
    pub fn build(buffer: &'a [char], depth: usize, filter: &CharFilter) -> Self {
        let mut index = Self::default();
        for (i, &c) in buffer.iter().enumerate() {
            if !filter.qualifies(c) {
                continue;
            }
            let start = i + 1;
            let end = start.saturating_add(depth).min(buffer.len());
            index.record(c, &buffer[start..end]);
        }
        tracing::debug!(characters = index.entries.len(), "scope index built");
        index
    }

    fn record(&mut self, c: char, scope: &'a [char]) {
        let slot = match self.positions.get(&c) {
            Some(&slot) => slot,
            None => {
                self.entries.push(ScopeEntry {
                    character: c,
                    scopes: Vec::new(),
                });
                let slot = self.entries.len() - 1;
                self.positions.insert(c, slot);
                slot
            }
        };
        self.entries[slot].scopes.push(scope);
    }

    /// Keep only entries that can seed a hot word.
    ///
    /// Drops characters seen two times or fewer and characters on the
    /// filter's stop-list.
    pub fn retain_hot(&mut self, filter: &CharFilter) {
        self.entries.retain(|entry| {
            entry.occurrence_count() > MIN_HOT_OCCURRENCES && !filter.is_stop_char(entry.character)
        });
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.character, i))
            .collect();
    }

    /// Look up the entry for `c`.
    pub fn get(&self, c: char) -> Option<&ScopeEntry<'a>> {
        self.positions.get(&c).map(|&i| &self.entries[i])
    }

    /// Iterate entries in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = &ScopeEntry<'a>> {
        self.entries.iter()
    }

    /// Number of indexed characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no character was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
