//! The one in-scope `Result` error (input contract violation) and the
//! stderr-gated diagnostic channel used for non-fatal capacity warnings.
//!
//! | Rust item | Origin |
//! |---|---|
//! | `XssError` | the input-contract violation kind — modelled on `Lz4FError`'s manual `Display`/`Error` impl |
//! | `notify_level` / `set_notify_level` / `notify` | `DISPLAY_LEVEL` / `display_level` in `src/io/prefs.rs` |

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// The single `Result`-bearing error kind: an input-contract violation.
/// Capacity overflow and internal invariant violations are not represented
/// here: they are a diagnostic warning and a panic respectively, never a
/// recoverable `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XssError {
    /// `T` is shorter than the two sentinels plus one interior byte.
    TooShort,
    /// `T[0]` or `T[N-1]` is not the sentinel byte `0`.
    MissingSentinel,
    /// An interior byte (`1..N-1`) is `0`.
    InteriorSentinel,
}

impl XssError {
    fn message(&self) -> &'static str {
        match self {
            XssError::TooShort => "text must hold two sentinels and at least one interior byte",
            XssError::MissingSentinel => "text must start and end with the sentinel byte 0",
            XssError::InteriorSentinel => "interior bytes must be non-zero",
        }
    }
}

impl fmt::Display for XssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for XssError {}

/// Notification level for the diagnostic channel. `0` is silent; `1` prints
/// warnings such as "index type too narrow for N".
/// Equivalent in spirit to `DISPLAY_LEVEL`.
pub static NOTIFY_LEVEL: AtomicI32 = AtomicI32::new(1);

/// Raise or lower the notification level. Callers embedding this crate in a
/// silent context can set this to `0`.
pub fn set_notify_level(level: i32) {
    NOTIFY_LEVEL.store(level, Ordering::Relaxed);
}

/// Write `msg` to stderr if the current notification level is `>= level`.
#[inline]
pub fn notify(level: i32, msg: &str) {
    if NOTIFY_LEVEL.load(Ordering::Relaxed) >= level {
        eprintln!("{}", msg);
    }
}
