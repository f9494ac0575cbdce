//! E2E Test Suite: PSS/NSS/Lyndon array construction against a naive
//! suffix-comparison reference.
//!
//! Grounded on `check_array.hpp`'s `check_pss`/`check_nss` in the reference
//! benchmark harness: a naive O(N^2) scan that compares suffixes
//! character-by-character rather than an independent clever algorithm.

extern crate xss;

use xss::{lyndon_array, pss_and_lyndon_array, pss_and_nss_array, pss_array, sentinel_wrap};

fn is_smaller(text: &[u8], mut i: usize, mut j: usize) -> bool {
    while text[i] == text[j] {
        i += 1;
        j += 1;
    }
    text[i] < text[j]
}

fn naive_pss(text: &[u8]) -> Vec<u32> {
    // T[0] = 0 is always smaller than any interior suffix, so the downward
    // scan is guaranteed to terminate at j = 0.
    let n = text.len();
    let mut pss = vec![0u32; n];
    pss[0] = n as u32;
    for i in 1..n - 1 {
        let mut j = i - 1;
        while !is_smaller(text, j, i) {
            j -= 1;
        }
        pss[i] = j as u32;
    }
    pss[n - 1] = n as u32;
    pss
}

fn naive_nss(text: &[u8]) -> Vec<u32> {
    // T[n-1] = 0 is always smaller than any interior suffix, so the upward
    // scan is guaranteed to terminate at j = n - 1.
    let n = text.len();
    let mut nss = vec![0u32; n];
    for i in 1..n - 1 {
        let mut j = i + 1;
        while !is_smaller(text, j, i) {
            j += 1;
        }
        nss[i] = j as u32;
    }
    nss[0] = n as u32;
    nss[n - 1] = n as u32;
    nss
}

fn check_all(text: &[u8]) {
    let expected_pss = naive_pss(text);
    let expected_nss = naive_nss(text);
    let expected_lyndon: Vec<u32> = (0..text.len())
        .map(|i| expected_nss[i] - i as u32)
        .collect();

    assert_eq!(pss_array(text, None).unwrap(), expected_pss, "pss_array");

    let (pss, nss) = pss_and_nss_array(text, None).unwrap();
    assert_eq!(pss, expected_pss, "pss_and_nss_array pss half");
    assert_eq!(nss, expected_nss, "pss_and_nss_array nss half");

    let (pss2, lyndon) = pss_and_lyndon_array(text, None).unwrap();
    assert_eq!(pss2, expected_pss, "pss_and_lyndon_array pss half");
    assert_eq!(lyndon, expected_lyndon, "pss_and_lyndon_array lyndon half");

    assert_eq!(lyndon_array(text, None).unwrap(), expected_lyndon, "lyndon_array");
}

#[test]
fn ascii_word_mississippi() {
    check_all(&sentinel_wrap(b"mississippi"));
}

#[test]
fn ascii_word_northamerica() {
    check_all(&sentinel_wrap(b"northamerica"));
}

#[test]
fn ascii_word_amtrakairbusmississippi() {
    check_all(&sentinel_wrap(b"amtrakairbusmississippi"));
}

#[test]
fn single_interior_byte() {
    check_all(&sentinel_wrap(b"a"));
}

#[test]
fn uniform_run() {
    check_all(&sentinel_wrap(&[b'a'; 200]));
}

#[test]
fn strictly_increasing_bytes() {
    let body: Vec<u8> = (1u8..=200).collect();
    check_all(&sentinel_wrap(&body));
}

#[test]
fn strictly_decreasing_bytes() {
    let body: Vec<u8> = (1u8..=200).rev().collect();
    check_all(&sentinel_wrap(&body));
}

#[test]
fn fibonacci_like_run_rich_text() {
    // Concatenated Fibonacci words exercise periodic runs of growing length,
    // the shape the run-extension/lookahead pair targets.
    let mut a = vec![b'a'];
    let mut b = vec![b'b'];
    while a.len() < 4000 {
        let mut next = b.clone();
        next.extend_from_slice(&a);
        a = b;
        b = next;
    }
    b.truncate(4000);
    check_all(&sentinel_wrap(&b));
}

#[test]
fn run_of_runs_family() {
    for r in [2usize, 4, 8, 16, 32] {
        let mut body = Vec::new();
        let unit = [b'x', b'y'];
        for i in 0..r * 20 {
            body.push(unit[i % unit.len()]);
        }
        check_all(&sentinel_wrap(&body));
    }
}

#[test]
fn random_uniform_small_alphabet() {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut body = Vec::with_capacity(2000);
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        body.push(1 + (state % 4) as u8);
    }
    check_all(&sentinel_wrap(&body));
}

#[test]
fn custom_threshold_matches_default() {
    let text = sentinel_wrap(b"abababababababababababab");
    let default = pss_array(&text, None).unwrap();
    let low = pss_array(&text, Some(8)).unwrap();
    let high = pss_array(&text, Some(100_000)).unwrap();
    assert_eq!(default, low);
    assert_eq!(default, high);
}
