//! Amortised lookahead: once PSS(i) is known, copy already-computed array
//! values over the anchor-bounded prefix `[i+1, i+anchor)` instead of
//! recomputing them from scratch.
//!
//! Grounded on `pss_array_amortized_lookahead` in `lyndon_array.hpp`.

use super::context::{Ctx, Secondary};
use crate::anchor::get_anchor;

/// Copy PSS (and, if requested, NSS/Lyndon) values for `[i+1, i+anchor)` from
/// `[j+1, j+anchor)` shifted by `distance = i - j`. Returns the new `i`
/// (`i + anchor - 1`; the driver's loop then adds the final `+1`).
pub fn amortized_lookahead(
    ctx: &Ctx,
    array: &mut [u32],
    aux: Option<&mut [u32]>,
    j: u32,
    i: u32,
    max_lce: u32,
    distance: u32,
) -> u32 {
    let window = &ctx.text[i as usize..];
    let anchor = get_anchor(window, max_lce);

    match aux {
        Some(aux) => {
            for k in 1..anchor {
                array[(i + k) as usize] = array[(j + k) as usize] + distance;
                match ctx.secondary {
                    Secondary::Nss => {
                        aux[(i + k) as usize] = aux[(j + k) as usize] + distance;
                    }
                    Secondary::Lyndon => {
                        aux[(i + k) as usize] = aux[(j + k) as usize];
                    }
                    Secondary::None => {}
                }
            }
        }
        None => {
            for k in 1..anchor {
                array[(i + k) as usize] = array[(j + k) as usize] + distance;
            }
        }
    }

    i + anchor - 1
}
