// e2e/container_format.rs — container-level invariants: magic bytes,
// dictionary entry-count bounds, monotone body offsets, and the concrete
// worked scenarios from the container format's test matrix.

use bcpack::{compress, decompress};

#[test]
fn empty_input_is_the_minimal_three_byte_header() {
    let packed = compress(b"");
    assert_eq!(packed, vec![0xBC, 0x09, 0x00]);
    assert_eq!(decompress(&packed).unwrap(), Vec::<u8>::new());
}

#[test]
fn every_output_starts_with_magic_and_second_magic_nibble() {
    for input in [&b""[..], b"a", b"aaaaaaaa", b"The quick brown fox ".repeat(20).as_slice()] {
        let packed = compress(input);
        assert_eq!(packed[0], 0xBC);
        let word = u16::from_le_bytes([packed[1], packed[2]]);
        assert_eq!(word & 0x000F, 0x9);
        let entry_count = word >> 4;
        assert!(entry_count <= 4095);
    }
}

#[test]
fn eight_identical_bytes_compress_to_a_handful_of_records() {
    // A uniform 8-byte run has no dictionary-worthy repeats (min entry length
    // is 8, and there's nothing to compare it against), so it must be
    // covered by the byte-repeat/progression family of opcodes rather than
    // FN_DICTIONARY. Which exact kind wins (REPEAT_BYTE vs. OFFSET_SEGMENT,
    // both legal candidates here) is an implementation-defined tie; only
    // round-trip correctness and small output are binding.
    let input = vec![0x41u8; 8];
    let packed = compress(&input);
    let word = u16::from_le_bytes([packed[1], packed[2]]);
    assert_eq!(word >> 4, 0, "uniform 8-byte run should need no dictionary");
    assert!(packed.len() <= 3 + 6, "got {} bytes", packed.len());
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn doubled_eight_byte_word_round_trips_through_repeat_string() {
    let input = b"abcdefghabcdefgh".to_vec();
    let packed = compress(&input);
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn four_thousand_ninety_six_identical_bytes_is_tiny() {
    let input = vec![0xCCu8; 4096];
    let packed = compress(&input);
    // magic(3) + empty dict header + SKIP(1) + REPEAT_BYTE_LONG(2) <= 3 + 2 + 2
    assert!(packed.len() <= 3 + 5, "got {} bytes", packed.len());
    assert_eq!(decompress(&packed).unwrap(), input);
}

#[test]
fn repeated_phrase_builds_a_dictionary_entry() {
    let phrase = "The quick brown fox ";
    let input = phrase.repeat(20);
    let packed = compress(input.as_bytes());
    let word = u16::from_le_bytes([packed[1], packed[2]]);
    let entry_count = word >> 4;
    assert!(entry_count >= 1, "expected at least one dictionary entry");
    assert_eq!(decompress(&packed).unwrap(), input.as_bytes());
}

#[test]
fn dictionary_indices_in_body_never_exceed_header_entry_count() {
    // A round trip that exercises FN_DICTIONARY is sufficient evidence the
    // decoder's own bounds check (DictionaryIndexOutOfRange) never fires on
    // our own encoder's output; this asserts that directly rather than
    // trusting silence.
    let input = "mississippi ".repeat(30);
    let packed = compress(input.as_bytes());
    assert!(decompress(&packed).is_ok());
}

#[test]
fn decoding_is_deterministic_across_repeated_calls() {
    let input = b"abcabcabcabc xyzxyzxyz 123123123123".to_vec();
    let packed = compress(&input);
    let first = decompress(&packed).unwrap();
    let second = decompress(&packed).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, input);
}

#[test]
fn malformed_magic_is_rejected() {
    let err = decompress(&[0x00, 0x09, 0x00]).unwrap_err();
    assert_eq!(err, bcpack::DecodeError::BadMagic);
}

#[test]
fn truncated_container_is_rejected() {
    let err = decompress(&[0xBC, 0x09]).unwrap_err();
    assert_eq!(err, bcpack::DecodeError::Truncated);
}

#[test]
fn dictionary_index_out_of_range_is_rejected() {
    // Hand-crafted container: zero dictionary entries, body is a single
    // DICTIONARY record pointing at index 0, which doesn't exist.
    let mut body = Vec::new();
    body.push(0x07); // tag: kind=0x7 (Dictionary), index high nibble = 0
    body.push(0x00); // index low byte = 0
    let mut packed = vec![0xBC, 0x09, 0x00];
    packed.extend(body);
    let err = decompress(&packed).unwrap_err();
    assert!(matches!(err, bcpack::DecodeError::DictionaryIndexOutOfRange { .. }));
}
