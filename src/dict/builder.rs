//! Dictionary Builder: turns the raw input into a table of repeated
//! substrings worth referencing by index instead of re-encoding inline.
//!
//! Grounded on `create_compress_dictionary`/`parts_compare` in the original
//! reference encoder, with one deliberate deviation: the reference used a
//! 4-octet minimum part length, superseded here by the 8-octet minimum of
//! the format this crate actually targets.

use super::{DictTable, MIN_ENTRY_LEN};

/// Build a dictionary from `input` by, for every possible anchor byte,
/// splitting the input on occurrences of that byte and keeping the
/// sufficiently-long, non-duplicate common prefixes shared by adjacent
/// (sorted) parts.
///
/// Returns a table sorted for matching (see [`DictTable::sort_for_matching`])
/// and capped at [`super::MAX_ENTRIES`] entries; once the cap is hit, the
/// remaining anchor bytes are skipped rather than erroring.
pub fn build_dictionary(input: &[u8]) -> DictTable {
    let mut table = DictTable::new();
    if input.is_empty() {
        return table;
    }

    for anchor in 0u16..=255 {
        if table.len() >= super::MAX_ENTRIES {
            break;
        }
        if !build_for_anchor(input, anchor as u8, &mut table) {
            break;
        }
    }

    table.sort_for_matching();
    table
}

/// Process one anchor byte. Returns `false` if the table filled up and the
/// caller should stop trying further anchors.
fn build_for_anchor(input: &[u8], anchor: u8, table: &mut DictTable) -> bool {
    let occurrences: Vec<usize> = input
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == anchor)
        .map(|(i, _)| i)
        .collect();
    if occurrences.is_empty() {
        return true;
    }

    // Part boundaries: a leading, anchor-less prefix (if the input doesn't
    // start with the anchor), then one part per occurrence running to the
    // next occurrence or end-of-input.
    let mut bounds = Vec::with_capacity(occurrences.len() + 2);
    if occurrences[0] != 0 {
        bounds.push(0);
    }
    bounds.extend(occurrences.iter().copied());
    bounds.push(input.len());

    let mut parts: Vec<Vec<u8>> = bounds
        .windows(2)
        .map(|w| input[w[0]..w[1]].to_vec())
        .collect();
    if parts.len() < 2 {
        return true;
    }
    parts.sort();

    // Truncate each part down to the length of common prefix it shares with
    // its sorted successor; discard it outright if that shared prefix is
    // shorter than the minimum useful entry length. A slice's natural `Ord`
    // already treats "is a strict prefix of" as "sorts before", matching the
    // reference's EOF-sorts-lowest comparison.
    let n = parts.len();
    let mut parts: Vec<Option<Vec<u8>>> = parts.into_iter().map(Some).collect();
    for i in 1..n {
        let prefix_len = common_prefix_len(parts[i - 1].as_ref().unwrap(), parts[i].as_ref().unwrap());
        if prefix_len < MIN_ENTRY_LEN {
            parts[i - 1] = None;
            continue;
        }
        let prev = parts[i - 1].as_mut().unwrap();
        if prefix_len < prev.len() {
            prev.truncate(prefix_len);
        }
    }

    // Dedup: walk the surviving (non-discarded) parts in order; a part that
    // is byte-for-byte identical to its successor is dropped (the successor
    // carries it forward). The final surviving part is always dropped
    // without being finalized — it was never compared against a successor
    // of its own, so it can't be confirmed distinct.
    let mut idx = 0;
    while idx < n && parts[idx].is_none() {
        idx += 1;
    }
    if idx >= n {
        return true;
    }
    let mut last_idx = idx;
    idx += 1;
    loop {
        while idx < n && parts[idx].is_none() {
            idx += 1;
        }
        if idx >= n {
            break;
        }
        let duplicate = parts[last_idx] == parts[idx];
        if duplicate {
            parts[last_idx] = None;
        } else if table.len() >= super::MAX_ENTRIES {
            return false;
        } else {
            table.push_raw(parts[last_idx].take().unwrap());
        }
        last_idx = idx;
        idx += 1;
    }

    true
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_dictionary() {
        let table = build_dictionary(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn repeated_phrase_produces_an_entry() {
        let input = b"The quick brown fox. The quick brown fox. The quick brown fox.".to_vec();
        let table = build_dictionary(&input);
        assert!(table
            .entries()
            .iter()
            .any(|e| e.payload.len() >= MIN_ENTRY_LEN));
    }

    #[test]
    fn no_repeated_substring_of_minimum_length_yields_empty_dictionary() {
        let input: Vec<u8> = (0u8..=255).collect();
        let table = build_dictionary(&input);
        assert!(table.is_empty());
    }

    #[test]
    fn entries_meet_minimum_length() {
        let input = b"abcdefghij abcdefghij abcdefghij klmnopqrst klmnopqrst".to_vec();
        let table = build_dictionary(&input);
        for e in table.entries() {
            assert!(e.payload.len() >= MIN_ENTRY_LEN, "{:?}", e.payload);
        }
    }
}
