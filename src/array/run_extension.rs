//! Run extension: when the chain position with maximum LCE turns out to be
//! periodic, fill the array analytically over whole periods instead of
//! walking one position at a time.
//!
//! Grounded on `pss_array_run_extension` in `lyndon_array.hpp`.

use super::context::{Ctx, Secondary};

/// Extend a detected period-`period` run starting at `j` with max LCE
/// `max_lce`, advancing `i` in place. Returns the new `i`.
pub fn run_extension(
    ctx: &Ctx,
    array: &mut [u32],
    mut aux: Option<&mut [u32]>,
    j: u32,
    mut i: u32,
    max_lce: u32,
    period: u32,
) -> u32 {
    let j_smaller_i = ctx.byte(j + max_lce) < ctx.byte(i + max_lce);
    let repetitions = max_lce / period - 1;
    let new_i = i + repetitions * period;

    for k in (i + 1)..new_i {
        array[k as usize] = array[(k - period) as usize] + period;
        if let Some(aux) = aux.as_deref_mut() {
            match ctx.secondary {
                Secondary::Nss => aux[k as usize] = aux[(k - period) as usize] + period,
                Secondary::Lyndon => aux[k as usize] = aux[(k - period) as usize],
                Secondary::None => {}
            }
        }
    }

    if j_smaller_i {
        // Increasing run.
        for _ in 0..repetitions {
            i += period;
            array[i as usize] = i - period;
        }
    } else {
        // Decreasing run.
        let pss_of_new_i = array[i as usize];
        for _ in 0..repetitions {
            if let Some(aux) = aux.as_deref_mut() {
                match ctx.secondary {
                    Secondary::Nss => aux[i as usize] = i + period,
                    Secondary::Lyndon => aux[i as usize] = period,
                    Secondary::None => {}
                }
            }
            i += period;
            array[i as usize] = pss_of_new_i;
        }
    }

    i
}
