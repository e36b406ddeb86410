//! Levenshtein distance with unit cost insertions, deletions and substitutions.
//!
//! All functions evaluate the same recurrence on suffix pairs `(a[i..], b[j..])`:
//! ```text
//! ed(i, j) = min(ed(i+1, j+1) + [a[i] != b[j]], ed(i, j+1) + 1, ed(i+1, j) + 1)
//! ```
//! with `ed = |b[j..]|` when `a[i..]` is empty and vice versa.
use log::debug;

use crate::memo::{MemoStats, Memoized};
use crate::prelude::*;

/// Edit distance between `a` and `b`.
///
/// Fills the table of suffix pairs bottom-up in `O(|a| |b|)` time and
/// `O(|b|)` memory, without recursion. Identical inputs return 0 after a
/// linear scan.
pub fn edit_distance<T: Eq>(a: &[T], b: &[T]) -> Cost {
    if a == b {
        return 0;
    }
    let s = Suffixes::new(a, b);
    s.fill_table(|i, j, below, row| {
        let (la, lb) = s.remaining(i, j);
        if la == 0 {
            return lb;
        }
        if lb == 0 {
            return la;
        }
        let cost = (!s.first_eq(i, j)) as Cost;
        min(below[j + 1] + cost, min(row[j + 1] + 1, below[j] + 1))
    })
}

/// Edit distance between `a` and `b`, evaluated top-down through a
/// memoizer keyed on suffix start positions.
///
/// Also returns the memoizer statistics. Recursion depth is up to `|a|+|b|`.
pub fn edit_distance_memo<T: Eq>(a: &[T], b: &[T]) -> (Cost, MemoStats) {
    let s = Suffixes::new(a, b);
    let ed = Memoized::recursive(
        |ed: &dyn Fn((usize, usize)) -> Cost, (i, j): (usize, usize)| {
            let (la, lb) = s.remaining(i, j);
            if la == 0 {
                return lb;
            }
            if lb == 0 {
                return la;
            }
            if s.same_tail(i, j) {
                return 0;
            }
            let cost = (!s.first_eq(i, j)) as Cost;
            min(
                ed((i + 1, j + 1)) + cost,
                min(ed((i, j + 1)) + 1, ed((i + 1, j)) + 1),
            )
        },
    );
    let distance = ed.call((0, 0));
    let stats = ed.stats();
    debug!(
        "edit distance {distance} for |a|={} |b|={}: {} states, {} hits",
        a.len(),
        b.len(),
        stats.misses,
        stats.hits
    );
    (distance, stats)
}

/// Edit distance by plain recursion on `(start, length)` ranges of both inputs.
///
/// Not memoized: takes time exponential in `min(|a|, |b|)`. Only useful as an
/// independent reference for the other implementations on short inputs.
pub fn edit_distance_reference<T: Eq>(a: &[T], b: &[T]) -> Cost {
    fn ed<T: Eq>(a: &[T], i: usize, len_a: usize, b: &[T], j: usize, len_b: usize) -> Cost {
        if len_a == 0 {
            return len_b;
        }
        if len_b == 0 {
            return len_a;
        }
        let cost = (a[i] != b[j]) as Cost;
        min(
            ed(a, i + 1, len_a - 1, b, j, len_b) + 1,
            min(
                ed(a, i, len_a, b, j + 1, len_b - 1) + 1,
                ed(a, i + 1, len_a - 1, b, j + 1, len_b - 1) + cost,
            ),
        )
    }
    ed(a, 0, a.len(), b, 0, b.len())
}
