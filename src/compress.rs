//! Top-level compress entry point: build dictionary, plan, optimize, and
//! assemble the wire container in one pass over an in-memory input.

use crate::container;
use crate::dict::{build_dictionary, optimize_dictionary};
use crate::planner::{encode_remapped_body, plan_records};

/// Compress `input` into a complete container byte stream.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut dict = build_dictionary(input);
    let records = plan_records(input, &mut dict);
    let optimized = optimize_dictionary(&dict);
    let body = encode_remapped_body(input, &records, &optimized.remap, &optimized.inlined);

    let dictionary: Vec<(Vec<u8>, bool)> = optimized
        .header_entries
        .into_iter()
        .map(|e| (e.payload, e.self_compressed))
        .collect();

    container::assemble(&dictionary, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress::decompress;

    fn roundtrip(input: &[u8]) {
        let compressed = compress(input);
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, input, "round-trip failed for {} byte input", input.len());
    }

    #[test]
    fn empty_input_roundtrips() {
        roundtrip(b"");
    }

    #[test]
    fn single_byte_roundtrips() {
        roundtrip(b"a");
    }

    #[test]
    fn short_literal_roundtrips() {
        roundtrip(b"abcdefghijklmno");
    }

    #[test]
    fn repeated_byte_run_roundtrips() {
        let input = vec![0xCCu8; 4096];
        roundtrip(&input);
    }

    #[test]
    fn repeated_phrase_roundtrips() {
        let input = "The quick brown fox ".repeat(20);
        roundtrip(input.as_bytes());
    }

    #[test]
    fn doubled_word_roundtrips() {
        roundtrip(b"abcdefghabcdefgh");
    }

    #[test]
    fn arithmetic_progression_roundtrips() {
        let input: Vec<u8> = (0..256).map(|i| (i * 3) as u8).collect();
        roundtrip(&input);
    }

    #[test]
    fn fibonacci_bytes_roundtrip() {
        let mut v = vec![1u8, 1];
        for _ in 0..50 {
            let next = v[v.len() - 1].wrapping_add(v[v.len() - 2]);
            v.push(next);
        }
        roundtrip(&v);
    }

    #[test]
    fn palindrome_roundtrips() {
        roundtrip(b"abcdefghhgfedcba");
    }

    #[test]
    fn adversarial_uniform_bytes_roundtrip() {
        // Every byte value once, in order: no repeats, no progressions.
        let input: Vec<u8> = (0u8..=255).collect();
        roundtrip(&input);
    }

    #[test]
    fn compress_is_idempotent_on_decode() {
        let input = b"mississippi mississippi mississippi".to_vec();
        let compressed = compress(&input);
        let once = crate::decompress::decompress(&compressed).unwrap();
        let twice = crate::decompress::decompress(&compressed).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, input);
    }
}
