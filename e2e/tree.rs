//! E2E Test Suite: the PSS-tree balanced-parentheses encoding.
//!
//! Grounded on `check_tree.hpp` in the reference benchmark harness: rather
//! than an independent tree-construction algorithm, the check reconstructs
//! a PSS array from the parenthesis stream and re-runs the array check
//! against it.

extern crate xss;

use xss::tree::{pss_tree, pss_tree_to_pss_array};
use xss::{pss_array, sentinel_wrap};

fn check_tree(text: &[u8]) {
    let expected = pss_array(text, None).unwrap();
    let bits = pss_tree(text, None).unwrap();
    assert_eq!(bits.len(), (text.len() << 1) + 2);
    let recovered = pss_tree_to_pss_array(&bits, text.len());
    assert_eq!(recovered, expected);
}

#[test]
fn tree_matches_array_on_ascii_words() {
    check_tree(&sentinel_wrap(b"mississippi"));
    check_tree(&sentinel_wrap(b"northamerica"));
    check_tree(&sentinel_wrap(b"amtrakairbusmississippi"));
}

#[test]
fn tree_matches_array_on_minimal_input() {
    check_tree(&sentinel_wrap(b"a"));
}

#[test]
fn tree_matches_array_on_uniform_run() {
    check_tree(&sentinel_wrap(&[b'a'; 500]));
}

#[test]
fn tree_matches_array_on_periodic_text() {
    let body: Vec<u8> = (0..3000).map(|i| b"ab"[i % 2]).collect();
    check_tree(&sentinel_wrap(&body));
}

#[test]
fn tree_matches_array_on_random_text() {
    let mut state = 0x0123_4567_89ab_cdefu64;
    let mut body = Vec::with_capacity(5000);
    for _ in 0..5000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        body.push(1 + (state % 6) as u8);
    }
    check_tree(&sentinel_wrap(&body));
}

#[test]
fn root_bits_are_double_open_and_double_close() {
    let text = sentinel_wrap(b"banana");
    let bits = pss_tree(&text, None).unwrap();
    assert!(bits.get(0));
    assert!(bits.get(1));
    let last = bits.len();
    assert!(!bits.get(last - 1));
    assert!(!bits.get(last - 2));
}
