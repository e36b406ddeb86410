//! LCS-style match scores: the number of symbols that can be aligned between
//! two sequences.
//!
//! Two recurrences on suffix pairs are provided. Both have the base cases
//! `m = 0` when either suffix is empty and `m = |a[i..]|` when the suffixes
//! are identical.
//!
//! `match_score` always takes the best of all three moves, adding one on the
//! diagonal when the first symbols match:
//! ```text
//! m(i, j) = max(m(i+1, j+1) + [a[i] == b[j]], m(i, j+1), m(i+1, j))
//! ```
//! `match_score2` advances greedily along the diagonal on a match, and only
//! branches on a mismatch:
//! ```text
//! m2(i, j) = 1 + m2(i+1, j+1)                           if a[i] == b[j]
//!            max(m2(i+1, j+1), m2(i, j+1), m2(i+1, j))  otherwise
//! ```
//! The second is the classical longest common subsequence recurrence. The
//! first computes the same values, but visits more states when evaluated
//! top-down.
use log::debug;

use crate::memo::{MemoStats, Memoized};
use crate::prelude::*;

/// Match score, always branching. See the module documentation.
pub fn match_score<T: Eq>(a: &[T], b: &[T]) -> Score {
    let s = Suffixes::new(a, b);
    s.fill_table(|i, j, below, row| {
        let (la, lb) = s.remaining(i, j);
        if la == 0 || lb == 0 {
            return 0;
        }
        let cost = s.first_eq(i, j) as Score;
        max(below[j + 1] + cost, max(row[j + 1], below[j]))
    })
}

/// Match score with greedy diagonal advance. Equals the length of the
/// longest common subsequence.
pub fn match_score2<T: Eq>(a: &[T], b: &[T]) -> Score {
    let s = Suffixes::new(a, b);
    s.fill_table(|i, j, below, row| {
        let (la, lb) = s.remaining(i, j);
        if la == 0 || lb == 0 {
            return 0;
        }
        if s.first_eq(i, j) {
            1 + below[j + 1]
        } else {
            max(below[j + 1], max(row[j + 1], below[j]))
        }
    })
}

/// `match_score`, evaluated top-down through a memoizer.
pub fn match_score_memo<T: Eq>(a: &[T], b: &[T]) -> (Score, MemoStats) {
    let s = Suffixes::new(a, b);
    let m = Memoized::recursive(
        |m: &dyn Fn((usize, usize)) -> Score, (i, j): (usize, usize)| {
            let (la, lb) = s.remaining(i, j);
            if la == 0 || lb == 0 {
                return 0;
            }
            if s.same_tail(i, j) {
                return la;
            }
            let cost = s.first_eq(i, j) as Score;
            max(m((i + 1, j + 1)) + cost, max(m((i, j + 1)), m((i + 1, j))))
        },
    );
    let score = m.call((0, 0));
    debug!("match score {score}: {:?}", m.stats());
    (score, m.stats())
}

/// `match_score2`, evaluated top-down through a memoizer.
pub fn match_score2_memo<T: Eq>(a: &[T], b: &[T]) -> (Score, MemoStats) {
    let s = Suffixes::new(a, b);
    let m = Memoized::recursive(
        |m: &dyn Fn((usize, usize)) -> Score, (i, j): (usize, usize)| {
            let (la, lb) = s.remaining(i, j);
            if la == 0 || lb == 0 {
                return 0;
            }
            if s.same_tail(i, j) {
                return la;
            }
            if s.first_eq(i, j) {
                return 1 + m((i + 1, j + 1));
            }
            max(m((i + 1, j + 1)), max(m((i, j + 1)), m((i + 1, j))))
        },
    );
    let score = m.call((0, 0));
    debug!("match score2 {score}: {:?}", m.stats());
    (score, m.stats())
}
