//! Dictionary table: entries, lookup, and the builder/optimizer stages that
//! populate and then reshape it.

pub mod builder;
pub mod optimizer;

pub use builder::build_dictionary;
pub use optimizer::{optimize_dictionary, OptimizedDictionary};

/// One candidate substring discovered by the builder, mutated by the planner
/// (usage) and the optimizer (payload/order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub payload: Vec<u8>,
    /// Number of times the planner chose a `DICTIONARY` record referring to
    /// this entry. Reset to zero at construction; incremented during
    /// planning, read (not mutated) by the optimizer.
    pub usage_count: u32,
    /// This entry's position in the sort-for-matching order, i.e. the index
    /// value every `DICTIONARY` record pointing at it carries in the
    /// planned (pre-optimization) body. Stamped by
    /// [`DictTable::sort_for_matching`]; used to remap those indices once
    /// the optimizer reorders entries for the header.
    pub original_index: u16,
}

/// An ordered table of at most 4095 entries, indexed 0..N-1. While building
/// and planning the table is kept sorted by payload (for prefix bsearch);
/// the optimizer produces a second, usage-ordered table for the wire format.
#[derive(Debug, Clone, Default)]
pub struct DictTable {
    entries: Vec<DictEntry>,
}

pub const MAX_ENTRIES: usize = 4095;
pub const MIN_ENTRY_LEN: usize = 8;

impl DictTable {
    pub fn new() -> Self {
        DictTable { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [DictEntry] {
        &mut self.entries
    }

    /// Append a freshly-built entry. `original_index` is meaningless until
    /// [`Self::sort_for_matching`] stamps it.
    pub fn push_raw(&mut self, payload: Vec<u8>) {
        self.entries.push(DictEntry {
            payload,
            usage_count: 0,
            original_index: 0,
        });
    }

    /// Sort entries by payload so [`Self::longest_prefix_match`] can bsearch,
    /// then stamp each entry's `original_index` to its position in this
    /// sorted order. Every `DICTIONARY` record the planner emits afterward
    /// refers to an entry by this position, so it must be fixed *after* the
    /// sort the matcher relies on, not before.
    pub fn sort_for_matching(&mut self) {
        self.entries.sort_by(|a, b| a.payload.cmp(&b.payload));
        for (i, e) in self.entries.iter_mut().enumerate() {
            e.original_index = i as u16;
        }
    }

    /// Find the longest entry whose payload is a prefix of `window`. Among
    /// entries tied on length, prefer the one with the highest usage count.
    ///
    /// The table is capped at 4095 entries, so a linear scan is cheap enough
    /// that it isn't worth the bug surface of a bsearch over prefix
    /// relationships; [`Self::sort_for_matching`] exists for the wire
    /// format's lookup-by-index convention, not for this scan.
    pub fn longest_prefix_match(&self, window: &[u8]) -> Option<(u16, usize)> {
        let mut best: Option<(u16, usize, u32)> = None; // (index, len, usage)
        for (i, e) in self.entries.iter().enumerate() {
            if e.payload.is_empty() || !window.starts_with(e.payload.as_slice()) {
                continue;
            }
            let len = e.payload.len();
            let better = match best {
                None => true,
                Some((_, blen, busage)) => len > blen || (len == blen && e.usage_count > busage),
            };
            if better {
                best = Some((i as u16, len, e.usage_count));
            }
        }
        best.map(|(i, l, _)| (i, l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_prefers_longer_entry() {
        let mut t = DictTable::new();
        t.push_raw(b"The".to_vec());
        t.push_raw(b"The quick".to_vec());
        t.push_raw(b"Th".to_vec());
        t.sort_for_matching();
        let (idx, len) = t.longest_prefix_match(b"The quick brown fox").unwrap();
        assert_eq!(len, 9);
        assert_eq!(t.entries()[idx as usize].payload, b"The quick");
    }

    #[test]
    fn longest_prefix_prefers_higher_usage_on_tie() {
        let mut t = DictTable::new();
        t.push_raw(b"abcdefgh".to_vec());
        t.entries_mut()[0].usage_count = 1;
        t.push_raw(b"abcdefgh".to_vec());
        t.entries_mut()[1].usage_count = 5;
        t.sort_for_matching();
        let (idx, _) = t.longest_prefix_match(b"abcdefghij").unwrap();
        assert_eq!(t.entries()[idx as usize].usage_count, 5);
    }

    #[test]
    fn no_match_returns_none() {
        let mut t = DictTable::new();
        t.push_raw(b"zzzzzzzz".to_vec());
        t.sort_for_matching();
        assert!(t.longest_prefix_match(b"abcdefgh").is_none());
    }
}
