//! Threshold defaults and the index-width capacity check.
//!
//! Constants mirror `xssinternal::DEFAULT_THRESHOLD` / `MIN_THRESHOLD` in
//! `lyndon_array.hpp`.

use crate::error::notify;

/// Default LCE threshold τ at which the fast path hands off to find-PSS.
pub const DEFAULT_THRESHOLD: u32 = 128;

/// Hard floor for τ; values below this are silently raised.
pub const MIN_THRESHOLD: u32 = 8;

/// Apply the `>= MIN_THRESHOLD` floor. `None` selects the default.
pub fn fix_threshold(threshold: Option<u32>) -> u32 {
    threshold.unwrap_or(DEFAULT_THRESHOLD).max(MIN_THRESHOLD)
}

/// `u32` can encode every index in `[0, N+1]` (the scratch marker) only while
/// `N < u32::MAX - 1`. Anything larger is a capacity overflow: the contract
/// makes behaviour beyond this range undefined, so we warn and let the
/// caller's arithmetic wrap rather than fail the call.
pub fn check_capacity(n: usize) {
    if n as u64 >= (u32::MAX as u64) - 1 {
        notify(
            1,
            &format!(
                "xss: text length {} exceeds the u32 index range; output is undefined by contract",
                n
            ),
        );
    }
}
