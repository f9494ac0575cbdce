//! Worst-case linear-time construction of the previous-smaller-suffix (PSS),
//! next-smaller-suffix (NSS), and Lyndon arrays of a byte string, plus an
//! optional balanced-parentheses encoding of the PSS tree.
//!
//! For an interior position `i` of a text `T` of length `n` (`T[0] = T[n-1] =
//! 0`, all interior bytes non-zero):
//!
//! - `pss[i]` is the largest `j < i` with `T[j..] < T[i..]` lexicographically.
//! - `nss[i]` is the smallest `j > i` with `T[j..] < T[i..]`.
//! - `lyndon[i] = nss[i] - i`, the length of the longest Lyndon word starting at `i`.
//!
//! The hard part is doing this in worst-case `O(n)` time even on highly
//! repetitive input, where a naive walk up the partial PSS chain degrades to
//! `O(n^2)`. This crate follows the construction of Ellert & Fischer
//! (`nearest-smaller-suffixes`): a fast path that walks the chain directly,
//! an escape ([`array::find_pss`]) for chains with long common prefixes, and
//! an amortised lookahead / run-extension pair that reuses already-computed
//! values over detected Lyndon runs and periods.
//!
//! # Layout
//!
//! | Module | Responsibility |
//! |---|---|
//! | [`text`] | The sentinel/shape contract on the input text |
//! | [`error`] | The one in-scope error kind (input violation) plus the diagnostic channel |
//! | [`config`] | Threshold defaults and clamping |
//! | [`lce`] | Longest-common-extension primitive |
//! | [`anchor`] | Duval factorisation and anchor-length computation |
//! | [`array`] | Sequential and parallel array drivers |
//! | [`tree`] | Telescoping stack, bit vector, and the PSS-tree builder |
//!
//! # Example
//!
//! ```
//! use xss::{sentinel_wrap, pss_array};
//!
//! let text = sentinel_wrap(b"banana");
//! let pss = pss_array(&text, None).unwrap();
//! assert_eq!(pss[text.len() - 1], text.len() as u32);
//! ```

pub mod anchor;
pub mod array;
pub mod config;
pub mod error;
pub mod lce;
pub mod text;
pub mod tree;

pub use array::parallel::{
    pss_and_lyndon_array_parallel, pss_and_nss_array_parallel, pss_array_parallel,
};
pub use array::sequential::{
    lyndon_array, nss_array, pss_and_lyndon_array, pss_and_nss_array, pss_array,
};
pub use config::{DEFAULT_THRESHOLD, MIN_THRESHOLD};
pub use error::XssError;
pub use text::sentinel_wrap;
pub use tree::pss_tree;
