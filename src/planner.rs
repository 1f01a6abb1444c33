//! Compression Planner: turns a flat byte slice into an ordered,
//! non-overlapping set of opcode records.
//!
//! Multi-pass greedy selection with a halving profit threshold: each pass
//! walks the still-uncommitted gaps left-to-right, commits the highest
//! profit candidate wherever one clears the current threshold, then halves
//! the threshold and tries again. This mirrors the "relax the bar and
//! resweep" shape used by the planner design note rather than a single
//! one-shot optimal parse, which the corpus never attempts for a top-level
//! greedy encoder.

use crate::dict::DictTable;
use crate::io::SeekableBuffer;
use crate::matchers::{candidates_at, Candidate};
use crate::opcode::Opcode;

const MAX_SKIP_RUN: usize = 4096;
const MAX_LITERAL_SKIP: usize = 16;

/// One record the planner committed to, with its source offset and the
/// uncompressed byte span it accounts for (tracked separately from
/// [`Opcode::coverage`] because `DICTIONARY` records don't know their own
/// entry length).
#[derive(Debug, Clone)]
pub struct PlannedRecord {
    pub offset: u32,
    pub opcode: Opcode,
    pub coverage: u32,
}

/// Plan `input` against `dict`, incrementing each chosen dictionary entry's
/// usage counter as it is selected. Returns committed records in ascending
/// offset order; gaps between them (destined to become `SKIP`/`SKIP_LONG`
/// filler) are not represented here — see [`encode_records`].
pub fn plan_records(input: &[u8], dict: &mut DictTable) -> Vec<PlannedRecord> {
    let n = input.len();
    let mut committed: Vec<PlannedRecord> = Vec::new();
    if n == 0 {
        return committed;
    }

    let mut threshold = (n as f64 / 8.0).max(1.0);
    while threshold >= 1.0 {
        committed.sort_by_key(|r| r.offset);
        let mut p = 0usize;
        let mut next_idx = 0usize;

        while p < n {
            while next_idx < committed.len() && (committed[next_idx].offset as usize) < p {
                next_idx += 1;
            }
            if next_idx < committed.len() && committed[next_idx].offset as usize == p {
                p += committed[next_idx].coverage as usize;
                next_idx += 1;
                continue;
            }
            let limit = if next_idx < committed.len() {
                committed[next_idx].offset as usize - p
            } else {
                n - p
            };
            if limit == 0 {
                p += 1;
                continue;
            }

            let cands = candidates_at(input, p, limit as u32, dict);
            if let Some(winner) = pick_best(cands, threshold) {
                if let Opcode::Dictionary { index } = winner.opcode {
                    dict.entries_mut()[index as usize].usage_count += 1;
                }
                let coverage = winner.coverage;
                committed.push(PlannedRecord {
                    offset: p as u32,
                    opcode: winner.opcode,
                    coverage,
                });
                p += coverage as usize;
            } else {
                p += 1;
            }
        }

        threshold /= 2.0;
    }

    committed.sort_by_key(|r| r.offset);
    committed
}

/// Highest-profit candidate clearing `threshold`; ties broken by smaller
/// encoded length, then by matcher-emission order (the matcher that ran
/// first wins a full tie).
fn pick_best(candidates: Vec<Candidate>, threshold: f64) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for c in candidates {
        if c.profit() < threshold {
            continue;
        }
        let better = match &best {
            None => true,
            Some(b) => {
                let cp = c.profit();
                let bp = b.profit();
                cp > bp || (cp == bp && c.encoded_len < b.encoded_len)
            }
        };
        if better {
            best = Some(c);
        }
    }
    best
}

/// Split a literal span into `SKIP`/`SKIP_LONG` records, each within its
/// format's count limit, longest-first where both apply.
fn skip_opcodes_for(bytes: &[u8]) -> Vec<Opcode> {
    let mut out = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        if rest.len() <= MAX_LITERAL_SKIP {
            out.push(Opcode::Skip {
                bytes: rest.to_vec(),
            });
            break;
        }
        let take = rest.len().min(MAX_SKIP_RUN);
        out.push(Opcode::SkipLong {
            bytes: rest[..take].to_vec(),
        });
        rest = &rest[take..];
    }
    out
}

/// Assemble the final body byte stream: committed records in offset order,
/// with `SKIP`/`SKIP_LONG` filler inserted for every gap between them (and
/// before the first / after the last).
pub fn encode_records(input: &[u8], records: &[PlannedRecord]) -> Vec<u8> {
    let mut body = crate::io::MemBuffer::new();

    let mut p = 0usize;
    for rec in records {
        let start = rec.offset as usize;
        if start > p {
            for op in skip_opcodes_for(&input[p..start]) {
                op.encode_into(&mut body);
            }
        }
        rec.opcode.encode_into(&mut body);
        p = start + rec.coverage as usize;
    }
    if p < input.len() {
        for op in skip_opcodes_for(&input[p..]) {
            op.encode_into(&mut body);
        }
    }

    body.into_vec()
}

/// Plan and encode `input` against `dict` in one step, without tracking
/// dictionary usage. Used for the dictionary optimizer's self-compression
/// pass, where the target dictionary is always a fresh empty table and
/// usage bookkeeping is irrelevant.
pub fn plan(input: &[u8], dict: &DictTable) -> Vec<u8> {
    let mut scratch = dict.clone();
    let records = plan_records(input, &mut scratch);
    encode_records(input, &records)
}

/// Assemble the final body after the dictionary optimizer has run: like
/// [`encode_records`], but every `DICTIONARY` record is rewritten first —
/// either to the entry's new header index via `remap`, or, for entries used
/// exactly once, spliced in place as the entry's own self-compressed opcode
/// stream via `inlined` (already valid, self-contained opcodes against an
/// empty dictionary — copied verbatim, not re-encoded as literals).
pub fn encode_remapped_body(
    input: &[u8],
    records: &[PlannedRecord],
    remap: &[Option<u16>],
    inlined: &[Option<Vec<u8>>],
) -> Vec<u8> {
    let mut body = crate::io::MemBuffer::new();

    let mut p = 0usize;
    for rec in records {
        let start = rec.offset as usize;
        if start > p {
            for op in skip_opcodes_for(&input[p..start]) {
                op.encode_into(&mut body);
            }
        }
        match &rec.opcode {
            Opcode::Dictionary { index } => {
                let i = *index as usize;
                if let Some(new_index) = remap[i] {
                    Opcode::Dictionary { index: new_index }.encode_into(&mut body);
                } else if let Some(opcodes) = &inlined[i] {
                    body.write_all(opcodes);
                } else {
                    // usage_count == 0 is unreachable for a committed
                    // record: the planner only emits `DICTIONARY` when it
                    // just chose that entry, which is itself a use.
                    unreachable!("planned dictionary record with zero recorded uses");
                }
            }
            other => other.encode_into(&mut body),
        }
        p = start + rec.coverage as usize;
    }
    if p < input.len() {
        for op in skip_opcodes_for(&input[p..]) {
            op.encode_into(&mut body);
        }
    }

    body.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictTable;

    #[test]
    fn empty_input_plans_nothing() {
        let mut dict = DictTable::new();
        assert!(plan_records(&[], &mut dict).is_empty());
    }

    #[test]
    fn all_zero_input_uses_repeat_byte() {
        let input = vec![0u8; 64];
        let mut dict = DictTable::new();
        let records = plan_records(&input, &mut dict);
        assert!(records
            .iter()
            .any(|r| matches!(r.opcode, Opcode::RepeatByteLong { .. } | Opcode::RepeatByte { .. })));
        let body = encode_records(&input, &records);
        assert!(body.len() < input.len());
    }

    #[test]
    fn records_never_overlap() {
        let input = b"abcabcabcabcxyzxyzxyzabcabcabc".to_vec();
        let mut dict = DictTable::new();
        let records = plan_records(&input, &mut dict);
        let mut cursor = 0u32;
        for r in &records {
            assert!(r.offset >= cursor, "records overlap or out of order");
            cursor = r.offset + r.coverage;
        }
    }

    #[test]
    fn literal_input_round_trips_through_skip_filler() {
        let input: Vec<u8> = (0u8..=200).collect();
        let mut dict = DictTable::new();
        let records = plan_records(&input, &mut dict);
        let body = encode_records(&input, &records);
        // decode and compare
        let mut cursor = crate::io::MemBuffer::from_vec(body);
        let mut out = crate::io::MemBuffer::new();
        while cursor.position() < cursor.len() {
            crate::opcode::decode_one(&mut cursor, &mut out, &[]).unwrap();
        }
        assert_eq!(out.into_vec(), input);
    }
}
