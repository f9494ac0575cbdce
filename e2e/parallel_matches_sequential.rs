//! E2E Test Suite: parallel array construction matches the sequential
//! driver across thread counts p ∈ {1,2,4,8,16,32}.

extern crate xss;

use xss::{
    pss_and_lyndon_array, pss_and_lyndon_array_parallel, pss_and_nss_array,
    pss_and_nss_array_parallel, pss_array, pss_array_parallel, sentinel_wrap,
};

fn random_body(seed: u64, n: usize, sigma: u8) -> Vec<u8> {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    let mut body = Vec::with_capacity(n);
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        body.push(1 + (state % sigma as u64) as u8);
    }
    body
}

const THREAD_COUNTS: [usize; 6] = [1, 2, 4, 8, 16, 32];

#[test]
fn pss_only_matches_across_thread_counts() {
    let text = sentinel_wrap(&random_body(1, 20_000, 4));
    let expected = pss_array(&text, None).unwrap();
    for &p in &THREAD_COUNTS {
        let got = pss_array_parallel(&text, p, None).unwrap();
        assert_eq!(got, expected, "p={p}");
    }
}

#[test]
fn pss_and_nss_match_across_thread_counts() {
    let text = sentinel_wrap(&random_body(2, 20_000, 4));
    let (expected_pss, expected_nss) = pss_and_nss_array(&text, None).unwrap();
    for &p in &THREAD_COUNTS {
        let (pss, nss) = pss_and_nss_array_parallel(&text, p, None).unwrap();
        assert_eq!(pss, expected_pss, "p={p} pss");
        assert_eq!(nss, expected_nss, "p={p} nss");
    }
}

#[test]
fn pss_and_lyndon_match_on_periodic_text() {
    let body: Vec<u8> = (0..20_000).map(|i| b"abc"[i % 3]).collect();
    let text = sentinel_wrap(&body);
    let (expected_pss, expected_lyndon) = pss_and_lyndon_array(&text, None).unwrap();
    for &p in &THREAD_COUNTS {
        let (pss, lyndon) = pss_and_lyndon_array_parallel(&text, p, None).unwrap();
        assert_eq!(pss, expected_pss, "p={p} pss");
        assert_eq!(lyndon, expected_lyndon, "p={p} lyndon");
    }
}

#[test]
fn run_of_runs_family_matches_across_thread_counts() {
    for r in [2usize, 4, 8, 16, 32, 64, 128, 256, 512] {
        let unit = [b'x', b'y'];
        let body: Vec<u8> = (0..r * 30).map(|i| unit[i % unit.len()]).collect();
        let text = sentinel_wrap(&body);
        let expected = pss_array(&text, None).unwrap();
        for &p in &[1usize, 4, 16] {
            let got = pss_array_parallel(&text, p, None).unwrap();
            assert_eq!(got, expected, "r={r} p={p}");
        }
    }
}

#[test]
fn excess_thread_request_is_clamped_not_rejected() {
    let text = sentinel_wrap(&random_body(3, 1000, 4));
    let expected = pss_array(&text, None).unwrap();
    let got = pss_array_parallel(&text, 256, None).unwrap();
    assert_eq!(got, expected);
}
