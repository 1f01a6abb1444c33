// e2e/roundtrip.rs — black-box round-trip coverage of the public
// `compress`/`decompress` API across the scenarios called out in the core
// design: boundary sizes, every special-cased byte pattern the matchers
// target, and the uniformly random adversarial case.

use rand::{Rng, SeedableRng};

use bcpack::{compress, decompress};

fn roundtrip(input: &[u8]) {
    let packed = compress(input);
    let unpacked = decompress(&packed).expect("decompress of our own output must succeed");
    assert_eq!(unpacked, input, "round-trip mismatch for {} byte input", input.len());
}

#[test]
fn empty_input() {
    roundtrip(b"");
}

#[test]
fn single_byte() {
    roundtrip(b"x");
}

#[test]
fn two_bytes() {
    roundtrip(b"xy");
}

#[test]
fn boundary_seventeen_bytes() {
    roundtrip(b"0123456789abcdefg");
}

#[test]
fn just_over_one_skip_run() {
    // One byte past the 16-literal SKIP cap, forcing SKIP_LONG framing.
    let input: Vec<u8> = (0u8..=16).collect();
    roundtrip(&input);
}

#[test]
fn four_thousand_ninety_six_bytes() {
    let input: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
    roundtrip(&input);
}

#[test]
fn sixty_four_kib_random() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x9E3779B97F4A7C15);
    let input: Vec<u8> = (0..64 * 1024).map(|_| rng.gen()).collect();
    roundtrip(&input);
}

#[test]
fn sixty_four_kib_all_zero() {
    roundtrip(&vec![0u8; 64 * 1024]);
}

#[test]
fn arithmetic_progression_256_bytes_step_3() {
    let input: Vec<u8> = (0..256u32).map(|i| (i.wrapping_mul(3)) as u8).collect();
    roundtrip(&input);
}

#[test]
fn fibonacci_bytes() {
    let mut v = vec![3u8, 5u8];
    for _ in 0..128 {
        let next = v[v.len() - 1].wrapping_add(v[v.len() - 2]);
        v.push(next);
    }
    roundtrip(&v);
}

#[test]
fn mirror_palindromes() {
    let mut input = b"abcdefghij".to_vec();
    let mut rev = input.clone();
    rev.reverse();
    input.extend(rev);
    roundtrip(&input);
}

#[test]
fn dictionary_favorable_repeated_phrase() {
    let input = "a sixteen byte!!".repeat(50);
    roundtrip(input.as_bytes());
}

#[test]
fn uniformly_random_worst_case() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDEADBEEF);
    let input: Vec<u8> = (0..8192).map(|_| rng.gen()).collect();
    roundtrip(&input);
}

#[test]
fn offset_segment_shared_high_nibble_run() {
    let input: Vec<u8> = (0..40u8).map(|i| 0x50 | (i % 13)).collect();
    roundtrip(&input);
}

#[test]
fn jumping_segment_slow_drift() {
    let mut v = vec![0x80u8];
    for i in 0..60u8 {
        let delta = ((i % 7) as i16) - 3;
        let next = (v.last().copied().unwrap() as i16 + delta).rem_euclid(256) as u8;
        v.push(next);
    }
    roundtrip(&v);
}

#[test]
fn geometric_progression_bytes() {
    let mut v = vec![1u8];
    for _ in 0..10 {
        v.push(v.last().copied().unwrap().wrapping_mul(3));
    }
    roundtrip(&v);
}

#[test]
fn mixed_binary_blob() {
    let mut input = Vec::new();
    input.extend_from_slice(b"The quick brown fox ");
    input.extend(std::iter::repeat(0xABu8).take(30));
    input.extend((0..20u8).map(|i| i.wrapping_mul(7)));
    input.extend_from_slice(b"The quick brown fox ");
    roundtrip(&input);
}
