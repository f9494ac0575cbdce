//! Longest-common-extension primitive.
//!
//! A single naïve byte-by-byte loop underlies all four entry points; the
//! bound variants only change where the loop starts and where it is allowed
//! to stop. Correctness relies on the sentinel contract (`T[N-1] = 0`, unequal
//! to every interior byte) so the loop always terminates without touching
//! `text.len()`.
//!
//! Grounded on `lce_type` in `lyndon_array.hpp`.

/// Smallest `k >= lce` with `text[l+k] != text[r+k]`. `l` and `r` must leave
/// room for the walk to reach a sentinel mismatch.
#[inline]
pub fn without_bounds(text: &[u8], l: u32, r: u32, lce: u32) -> u32 {
    let mut k = lce;
    let (l, r) = (l as usize, r as usize);
    while text[l + k as usize] == text[r + k as usize] {
        k += 1;
    }
    k
}

/// As [`without_bounds`] but never returns more than `upper`.
#[inline]
pub fn with_upper_bound(text: &[u8], l: u32, r: u32, upper: u32) -> u32 {
    let (lu, ru) = (l as usize, r as usize);
    let mut k = 0u32;
    while k < upper && text[lu + k as usize] == text[ru + k as usize] {
        k += 1;
    }
    k
}

/// As [`without_bounds`] but starts scanning at offset `lower` instead of 0.
#[inline]
pub fn with_lower_bound(text: &[u8], l: u32, r: u32, lower: u32) -> u32 {
    without_bounds(text, l, r, lower)
}

/// Starts at `lower`, never returns more than `upper`.
#[inline]
pub fn with_both_bounds(text: &[u8], l: u32, r: u32, lower: u32, upper: u32) -> u32 {
    let (lu, ru) = (l as usize, r as usize);
    let mut k = lower;
    while k < upper && text[lu + k as usize] == text[ru + k as usize] {
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_bounds_finds_mismatch() {
        let t = b"\0banana\0";
        // text[2..] = "anana\0", text[4..] = "ana\0": mismatch at offset 3.
        assert_eq!(without_bounds(t, 2, 4, 0), 3);
        // text[3..] = "nana\0", text[5..] = "na\0": mismatch at offset 2.
        assert_eq!(without_bounds(t, 3, 5, 0), 2);
    }

    #[test]
    fn with_upper_bound_caps() {
        let t = b"\0aaaaaa\0";
        assert_eq!(with_upper_bound(t, 1, 2, 3), 3);
        assert_eq!(with_upper_bound(t, 1, 2, 100), 5);
    }

    #[test]
    fn with_both_bounds_respects_lower_and_upper() {
        let t = b"\0aaaXaaa\0";
        // text[1..] = "aaaXaaa\0", text[5..] = "aaa\0": mismatch at offset 3.
        assert_eq!(with_both_bounds(t, 1, 5, 0, 10), 3);
        // starting the scan at offset 3 reports the mismatch immediately.
        assert_eq!(with_both_bounds(t, 1, 5, 3, 10), 3);
    }
}
