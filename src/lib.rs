//!
//! # edit-match
//!
//! Edit distance and LCS-style match scores between symbol sequences, built
//! on a generic memoizer.
//!
//! It can be used in a few ways:
//! - Call `edit_distance`, `match_score` or `match_score2` directly. These
//!   fill an explicit DP table and never recurse.
//! - Call the `*_memo` variants, which evaluate the recurrences top-down
//!   through a `Memoized` function and report cache statistics.
//! - Wrap any pure function of your own with `memoize`.
//! - Find the closest bookmark for a URL with `closest_bookmark`.
//!
//! ```
//! use edit_match::*;
//! assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
//! assert_eq!(match_score2(b"ABCBDAB", b"BDCAB"), 4);
//! ```
//!

mod error;
mod seq;

pub mod cli;
pub mod closest;
pub mod config;
pub mod distance;
pub mod matchers;
pub mod memo;
pub mod score;

pub use closest::{closest_bookmark, extract_domain, find_best_match, BookmarkNode, Closest};
pub use distance::{edit_distance, edit_distance_memo, edit_distance_reference};
pub use error::Error;
pub use matchers::{match_prefix, match_till_end, MatchAlgorithm};
pub use memo::{memoize, MemoKey, MemoStats, Memoized};
pub use score::{match_score, match_score2, match_score2_memo, match_score_memo};

/// Number of edit operations.
pub type Cost = usize;
/// Number of matching symbols.
pub type Score = usize;

mod prelude {
    pub use rustc_hash::FxHashMap as HashMap;
    pub use std::cmp::{max, min};

    pub use crate::seq::Suffixes;
    pub use crate::{Cost, Score};
}
