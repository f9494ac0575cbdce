//! E2E Test Suite: boundary behaviours and input-contract enforcement.

extern crate xss;

use xss::{pss_array, sentinel_wrap, XssError};

#[test]
fn n_equals_three_is_the_minimal_valid_input() {
    let text = sentinel_wrap(b"a");
    assert_eq!(text.len(), 3);
    let pss = pss_array(&text, None).unwrap();
    assert_eq!(pss, vec![3, 0, 3]);
}

#[test]
fn rejects_length_below_three() {
    assert_eq!(pss_array(&[], None), Err(XssError::TooShort));
    assert_eq!(pss_array(&[0, 0], None), Err(XssError::TooShort));
}

#[test]
fn rejects_missing_leading_or_trailing_sentinel() {
    assert_eq!(pss_array(&[1, 2, 0], None), Err(XssError::MissingSentinel));
    assert_eq!(pss_array(&[0, 2, 1], None), Err(XssError::MissingSentinel));
}

#[test]
fn rejects_interior_sentinel_byte() {
    assert_eq!(pss_array(&[0, 1, 0, 2, 0], None), Err(XssError::InteriorSentinel));
}

#[test]
fn large_random_text_matches_naive_reference_at_a_million_bytes() {
    let mut state = 0xC0FF_EE15_BAD1_DEA5u64;
    let mut body = Vec::with_capacity(1_048_576 - 2);
    for _ in 0..body.capacity() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        body.push(1 + (state % 4) as u8);
    }
    let text = sentinel_wrap(&body);
    let pss = pss_array(&text, None).unwrap();

    // A full O(N^2) naive check is too slow at this size; spot-check a
    // sample of positions instead, scanning each one's suffix comparisons
    // directly, the same primitive `check_array.hpp` builds on.
    let is_smaller = |mut i: usize, mut j: usize| {
        while text[i] == text[j] {
            i += 1;
            j += 1;
        }
        text[i] < text[j]
    };
    let mut state = 0x1357_9bdf_2468_ace0u64;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let i = 1 + (state as usize % (text.len() - 2));
        let p = pss[i] as usize;
        assert!(p < i);
        if p > 0 {
            assert!(is_smaller(p, i), "pss[{i}]={p} is not actually smaller");
        }
        for j in (p + 1)..i {
            assert!(!is_smaller(j, i), "position {j} between pss[{i}] and {i} is smaller too");
        }
    }
}

#[test]
fn threshold_is_floored_to_the_minimum() {
    let text = sentinel_wrap(b"banana");
    let floored = pss_array(&text, Some(0)).unwrap();
    let at_floor = pss_array(&text, Some(xss::MIN_THRESHOLD)).unwrap();
    assert_eq!(floored, at_floor);
}
