//! Array construction: the sequential combined driver and its parallel
//! static-partition counterpart, built on the shared primitives in
//! [`context`], [`find_pss`], [`lookahead`], and [`run_extension`].

pub mod context;
pub mod find_pss;
pub mod lookahead;
pub mod parallel;
pub mod run_extension;
pub mod sequential;
