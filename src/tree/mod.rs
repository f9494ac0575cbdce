//! The PSS tree variant: a balanced-parentheses encoding of the PSS tree,
//! built from an already-computed PSS array rather than by recomputing LCEs
//! node by node.
//!
//! Grounded on `pss_tree_naive` in `include/ds/tree/algorithm.hpp`. That
//! driver recomputes an unbounded LCE per comparison with no
//! find-PSS/lookahead/run-extension escape, which is quadratic on periodic
//! text — the exact pathology the array variant's escape machinery exists
//! to avoid. This crate instead runs the already-linear sequential array
//! driver to get PSS, then emits the parenthesis stream in one linear pass
//! driven purely by the parent links (no further LCE calls), using the
//! [`telescope`] stack to preserve the memory-saving property it exists
//! for.

pub mod bitvec;
pub mod telescope;

use crate::array::sequential::pss_array;
use crate::config::fix_threshold;
use crate::error::XssError;
use bitvec::{BitVec, ParenthesesStream};
use telescope::BufferedTelescopeStack;

/// Build the 2N+2-bit balanced-parentheses encoding of `text`'s PSS tree.
/// Bit 0 is the oldest bit; bits `0..1` are the root's double-open, bits
/// `2N..2N+1` are its double-close.
pub fn pss_tree(text: &[u8], threshold: Option<u32>) -> Result<BitVec, XssError> {
    let n = text.len();
    let pss = pss_array(text, threshold)?;
    let threshold = fix_threshold(threshold) as usize;

    let mut stream = ParenthesesStream::new(n);
    // Root double-open: the sentinel at position 0 is its own node, opened
    // once for itself and once more to host every top-level child.
    stream.append_opening_parenthesis();
    stream.append_opening_parenthesis();

    let buffer_window = (n >> 3).max(threshold);
    let mut stack = BufferedTelescopeStack::new(buffer_window);

    for i in 1..n - 1 {
        let parent = pss[i] as u64;
        while stack.top() > parent {
            stack.pop();
            stream.append_closing_parenthesis();
        }
        stack.push(i as u64);
        stream.append_opening_parenthesis();
    }

    while stack.top() > 0 {
        stack.pop();
        stream.append_closing_parenthesis();
    }
    // Close the root's child-hosting open, then open/close a node for the
    // trailing sentinel, then close the root itself.
    stream.append_closing_parenthesis();
    stream.append_opening_parenthesis();
    stream.append_closing_parenthesis();
    stream.append_closing_parenthesis();

    Ok(stream.into_bits())
}

/// Reconstruct a PSS array from a parentheses stream produced by
/// [`pss_tree`], by replaying the same stack discipline the reference
/// benchmark's `check_tree.hpp` harness uses. Exposed for that style of
/// check rather than for general use: production code should prefer
/// [`pss_array`] directly.
pub fn pss_tree_to_pss_array(bits: &BitVec, n: usize) -> Vec<u32> {
    let mut pss = vec![0u32; n];
    let mut stack: Vec<u32> = vec![0];
    let mut bit = 2usize; // skip the root's double-open
    let mut i = 1u32;
    while (i as usize) < n - 1 {
        while !bits.get(bit) {
            stack.pop();
            bit += 1;
        }
        pss[i as usize] = *stack.last().expect("stack underflow replaying tree bits");
        stack.push(i);
        bit += 1;
        i += 1;
    }
    pss[0] = n as u32;
    pss[n - 1] = n as u32;
    pss
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::sentinel_wrap;

    #[test]
    fn round_trips_through_parentheses_for_small_text() {
        let t = sentinel_wrap(b"banana");
        let expected = pss_array(&t, None).unwrap();
        let bits = pss_tree(&t, None).unwrap();
        let recovered = pss_tree_to_pss_array(&bits, t.len());
        assert_eq!(expected, recovered);
    }

    #[test]
    fn round_trips_on_periodic_text() {
        let body: Vec<u8> = (0..300).map(|i| b"ab"[i % 2]).collect();
        let t = sentinel_wrap(&body);
        let expected = pss_array(&t, None).unwrap();
        let bits = pss_tree(&t, None).unwrap();
        let recovered = pss_tree_to_pss_array(&bits, t.len());
        assert_eq!(expected, recovered);
    }

    #[test]
    fn bit_length_is_two_n_plus_two() {
        let t = sentinel_wrap(b"mississippi");
        let bits = pss_tree(&t, None).unwrap();
        assert_eq!(bits.len(), (t.len() << 1) + 2);
    }
}
