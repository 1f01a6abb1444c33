//! Dictionary Optimizer: reshapes a built table into the form that actually
//! goes on the wire, after the planner has recorded how many times each
//! entry was used.
//!
//! Grounded on the recursive self-compressed-entry handling in
//! `create_decompress_dictionary` (the encoder side of this stage was only a
//! stub in the retrieved reference sources, so the decode path's recursive
//! unwrapping is the clearest confirmation of the on-wire shape).

use super::{DictEntry, DictTable};
use crate::planner::plan;

/// Output of optimization: the entries that belong in the container header,
/// a remap from original builder index to header index for rewriting
/// `DICTIONARY` records in the already-planned body, and the set of
/// original indices that must be inlined at their single use site instead
/// of referenced by index (used exactly once, so a dictionary slot would
/// cost more than repeating the bytes).
pub struct OptimizedDictionary {
    /// Entries to write in the header, each possibly self-compressed
    /// (payload replaced by its own encoded body against an empty
    /// dictionary, with the high bit of the length field set on write).
    pub header_entries: Vec<OptimizedEntry>,
    /// original_index -> header index, for entries kept in the header.
    pub remap: Vec<Option<u16>>,
    /// original_index -> an already-encoded opcode stream (against an empty
    /// dictionary) for entries used exactly once. Unconditionally
    /// self-compressed per the source's "about to be inlined" rule — the
    /// body splices these bytes in verbatim in place of a `DICTIONARY`
    /// record, so they must already be valid standalone opcodes, not raw
    /// payload bytes.
    pub inlined: Vec<Option<Vec<u8>>>,
}

pub struct OptimizedEntry {
    pub payload: Vec<u8>,
    pub self_compressed: bool,
}

/// Partition entries by usage (cold entries are dropped, one-shot entries
/// are inlined, hot entries are kept and self-compressed where that's
/// strictly shorter), and build the index remap the body rewrite needs.
pub fn optimize_dictionary(table: &DictTable) -> OptimizedDictionary {
    let n = table.entries().len();
    let mut remap = vec![None; n];
    let mut inlined = vec![None; n];

    let mut hot: Vec<&DictEntry> = table
        .entries()
        .iter()
        .filter(|e| e.usage_count > 1)
        .collect();
    // Sort by payload length ascending: shorter entries first keeps the
    // header's self-compression passes working against the smallest
    // possible fresh dictionaries first, and gives a deterministic order
    // independent of build-time discovery order.
    hot.sort_by_key(|e| e.payload.len());

    let mut header_entries = Vec::with_capacity(hot.len());
    for e in &hot {
        let (payload, self_compressed) = self_compress(&e.payload);
        let header_index = header_entries.len() as u16;
        remap[e.original_index as usize] = Some(header_index);
        header_entries.push(OptimizedEntry {
            payload,
            self_compressed,
        });
    }

    for e in table.entries().iter().filter(|e| e.usage_count == 1) {
        inlined[e.original_index as usize] = Some(force_self_compress(&e.payload));
    }

    // Entries with usage_count == 0 simply have no remap and no inline
    // payload: the body never references them, so they are silently
    // dropped from the container.

    OptimizedDictionary {
        header_entries,
        remap,
        inlined,
    }
}

/// Try to re-encode `payload` against a fresh, empty dictionary. Since a
/// dictionary entry's payload can never reference the dictionary it is
/// itself part of (no self-reference, no reference to sibling entries),
/// optimization always runs the planner against an empty table, never the
/// outer one. Returns the replacement bytes and whether they are a
/// self-compressed body rather than the literal payload; the self-compressed
/// form is kept only when it is strictly shorter.
fn self_compress(payload: &[u8]) -> (Vec<u8>, bool) {
    let empty = DictTable::new();
    let encoded = plan(payload, &empty);
    if encoded.len() < payload.len() {
        (encoded, true)
    } else {
        (payload.to_vec(), false)
    }
}

/// Like [`self_compress`], but for one-shot entries: always returns the
/// encoded opcode stream, even when it is not shorter than the literal
/// payload. One-shot entries never occupy a header slot with a length
/// field and self-compressed bit — they are spliced into the body as raw
/// opcodes — so there is nothing to flag and no reason to prefer the
/// (now unused) literal form.
fn force_self_compress(payload: &[u8]) -> Vec<u8> {
    let empty = DictTable::new();
    plan(payload, &empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_entries_are_dropped() {
        let mut table = DictTable::new();
        table.push_raw(b"unused1234".to_vec());
        let opt = optimize_dictionary(&table);
        assert!(opt.header_entries.is_empty());
        assert!(opt.remap.iter().all(|r| r.is_none()));
        assert!(opt.inlined.iter().all(|i| i.is_none()));
    }

    #[test]
    fn one_shot_entries_are_inlined_not_kept_in_header() {
        let mut table = DictTable::new();
        table.push_raw(b"usedexactly1".to_vec());
        table.entries_mut()[0].usage_count = 1;
        let opt = optimize_dictionary(&table);
        assert!(opt.header_entries.is_empty());
        assert!(opt.inlined[0].is_some());
        // The inlined bytes are an opcode stream, not the literal payload —
        // decoding them against an empty dictionary must reproduce it.
        let encoded = opt.inlined[0].clone().unwrap();
        let mut cursor = crate::io::MemBuffer::from_vec(encoded);
        let mut out = crate::io::MemBuffer::new();
        use crate::io::SeekableBuffer;
        while cursor.position() < cursor.len() {
            crate::opcode::decode_one(&mut cursor, &mut out, &[]).unwrap();
        }
        assert_eq!(out.into_vec(), b"usedexactly1".to_vec());
    }

    #[test]
    fn hot_entries_are_kept_and_remapped() {
        let mut table = DictTable::new();
        table.push_raw(b"frequentlyusedphrase".to_vec());
        table.entries_mut()[0].usage_count = 5;
        let opt = optimize_dictionary(&table);
        assert_eq!(opt.header_entries.len(), 1);
        assert_eq!(opt.remap[0], Some(0));
    }
}
