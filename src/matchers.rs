use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::score::{match_score, match_score2};

/// The algorithm used to count matching characters. Defaults to `Prefix`.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchAlgorithm {
    /// Length of the common prefix.
    #[default]
    Prefix,
    /// Equal symbols at equal positions, up to the end of the shorter input.
    TillEnd,
    /// Longest common subsequence, allowing insertions and deletions.
    Fuzzy,
    /// LCS-style score that always branches. Same values as `Fuzzy`.
    Match,
}

impl MatchAlgorithm {
    pub fn score<T: Eq>(&self, a: &[T], b: &[T]) -> Score {
        match self {
            MatchAlgorithm::Prefix => match_prefix(a, b),
            MatchAlgorithm::TillEnd => match_till_end(a, b),
            MatchAlgorithm::Fuzzy => match_score2(a, b),
            MatchAlgorithm::Match => match_score(a, b),
        }
    }
}

/// Number of leading symbols that are equal in `a` and `b`.
pub fn match_prefix<T: Eq>(a: &[T], b: &[T]) -> Score {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Number of positions `i < min(|a|, |b|)` with `a[i] == b[i]`.
pub fn match_till_end<T: Eq>(a: &[T], b: &[T]) -> Score {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}
