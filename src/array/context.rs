//! Shared context threaded through the array drivers: the text, which
//! secondary output (if any) is being produced, and the LCE primitive bound
//! to `text`.
//!
//! Grounded on `array_context_type` in `lyndon_array.hpp`; collapsed into
//! one runtime-dispatched struct rather than a C++ template per position,
//! since the three output combinations can equally be a compile-time or a
//! runtime choice.

use crate::lce;

/// Which secondary array (if any) a driver call is producing alongside the
/// primary PSS array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secondary {
    None,
    Nss,
    Lyndon,
}

/// Read-only state shared by every driver invocation.
pub struct Ctx<'t> {
    pub text: &'t [u8],
    pub secondary: Secondary,
    pub threshold: u32,
}

impl<'t> Ctx<'t> {
    pub fn new(text: &'t [u8], secondary: Secondary, threshold: u32) -> Self {
        Ctx {
            text,
            secondary,
            threshold,
        }
    }

    #[inline]
    pub fn lce_without_bounds(&self, l: u32, r: u32, lce_hint: u32) -> u32 {
        lce::without_bounds(self.text, l, r, lce_hint)
    }

    #[inline]
    pub fn lce_with_upper_bound(&self, l: u32, r: u32, upper: u32) -> u32 {
        lce::with_upper_bound(self.text, l, r, upper)
    }

    #[inline]
    pub fn lce_with_lower_bound(&self, l: u32, r: u32, lower: u32) -> u32 {
        lce::with_lower_bound(self.text, l, r, lower)
    }

    #[inline]
    pub fn lce_with_both_bounds(&self, l: u32, r: u32, lower: u32, upper: u32) -> u32 {
        lce::with_both_bounds(self.text, l, r, lower, upper)
    }

    #[inline]
    pub fn byte(&self, idx: u32) -> u8 {
        self.text[idx as usize]
    }
}

/// Write a secondary value for a position `m` popped off the PSS chain while
/// processing `i`: `NSS[m] = i` or `Lyndon[m] = i - m`.
#[inline]
pub fn write_secondary(secondary: Secondary, aux: &mut [u32], m: u32, i: u32) {
    match secondary {
        Secondary::None => {}
        Secondary::Nss => aux[m as usize] = i,
        Secondary::Lyndon => aux[m as usize] = i - m,
    }
}
