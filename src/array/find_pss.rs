//! Two-probe escape from a long common prefix along the PSS chain.
//!
//! Grounded on `xss_array_find_pss` in `lyndon_array.hpp`. The tail of
//! `array` — positions that the sweep has not reached yet — is reused as
//! scratch to hold the reversed upper-to-lower chain while probing for the
//! exact boundary; this "scratch-in-output-array trick" is load-bearing.

use super::context::Ctx;

/// Escape the naive walk when its LCE exceeds the threshold. Returns
/// `(max_lce_j, max_lce, pss_of_i)`: the chain position with the greatest
/// observed LCE (used by lookahead/run-extension) and `i`'s actual PSS.
pub fn find_pss(ctx: &Ctx, array: &mut [u32], j: u32, i: u32, lce: u32) -> (u32, u32, u32) {
    let n = array.len() as u32;

    let mut upper = j;
    let mut upper_lce = lce;
    let mut lower = upper;
    let mut lower_lce = 0u32;

    while ctx.byte(upper + upper_lce) > ctx.byte(i + upper_lce) {
        if lower == upper {
            for _ in 0..upper_lce {
                lower = array[lower as usize];
            }
            lower_lce = ctx.lce_with_upper_bound(lower, i, upper_lce);
        } else {
            lower_lce = ctx.lce_with_both_bounds(lower, i, lower_lce, upper_lce);
        }
        if lower_lce == upper_lce {
            upper = array[upper as usize];
            upper_lce = ctx.lce_with_lower_bound(upper, i, upper_lce);
        } else {
            break;
        }
    }

    if ctx.byte(upper + upper_lce) < ctx.byte(i + upper_lce) {
        // PSS of i is upper.
        (upper, upper_lce, upper)
    } else {
        // PSS of i lies strictly between lower and upper.
        let mut upper_idx = n - 1;
        let mut lower_idx = upper_idx;
        array[upper_idx as usize] = upper;
        while upper > lower {
            lower_idx -= 1;
            array[lower_idx as usize] = array[upper as usize];
            upper = array[upper as usize];
        }
        upper = array[upper_idx as usize];

        let pss_of_i;
        loop {
            lower_lce =
                ctx.lce_with_both_bounds(array[lower_idx as usize], i, lower_lce, upper_lce);
            while lower_lce < upper_lce {
                lower_idx += 1;
                lower_lce =
                    ctx.lce_with_both_bounds(array[lower_idx as usize], i, lower_lce, upper_lce);
            }

            if lower_idx == upper_idx {
                pss_of_i = array[(lower_idx - 1) as usize];
                break;
            }

            upper_idx -= 1;
            upper_lce = ctx.lce_with_lower_bound(array[upper_idx as usize], i, upper_lce);

            if ctx.byte(array[upper_idx as usize] + upper_lce) < ctx.byte(i + upper_lce) {
                pss_of_i = array[upper_idx as usize];
                break;
            }
        }

        (array[upper_idx as usize], upper_lce, pss_of_i)
    }
}
