//! Find the bookmark whose URL matches a target URL best.
//!
//! The search runs in two stages. First only bookmarks on the same domain as
//! the target are scored. When there are none, all bookmarks are scored. The
//! result is unique, ambiguous (several bookmarks share the best score), or
//! no match when the best score is below a threshold.
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{Error, MatchAlgorithm};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub title: String,
    pub children: Vec<BookmarkNode>,
}

/// A node in a bookmark tree: nodes with a `url` are bookmarks, nodes with
/// `children` are folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookmarkNode {
    Bookmark(Bookmark),
    Folder(Folder),
}

/// Read a bookmark tree from a JSON file. The file contains either a single
/// root node or a list of them.
pub fn load_bookmarks(path: impl AsRef<Path>) -> Result<Vec<BookmarkNode>, Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Roots {
        Many(Vec<BookmarkNode>),
        One(BookmarkNode),
    }
    let data = std::fs::read_to_string(path)?;
    Ok(match serde_json::from_str(&data)? {
        Roots::Many(roots) => roots,
        Roots::One(root) => vec![root],
    })
}

/// Iterator over all bookmarks below a list of roots.
///
/// The children of the current folder are visited first; subfolders are
/// stacked and visited afterwards, last found first.
pub struct Bookmarks<'a> {
    folders: Vec<&'a Folder>,
    children: std::slice::Iter<'a, BookmarkNode>,
}

pub fn bookmarks(roots: &[BookmarkNode]) -> Bookmarks<'_> {
    Bookmarks {
        folders: vec![],
        children: roots.iter(),
    }
}

impl<'a> Iterator for Bookmarks<'a> {
    type Item = &'a Bookmark;

    fn next(&mut self) -> Option<&'a Bookmark> {
        loop {
            match self.children.next() {
                Some(BookmarkNode::Bookmark(bookmark)) => return Some(bookmark),
                Some(BookmarkNode::Folder(folder)) => self.folders.push(folder),
                None => self.children = self.folders.pop()?.children.iter(),
            }
        }
    }
}

/// The domain of a URL: the part after `scheme://` up to the first `/`,
/// without a leading `www.`.
pub fn extract_domain(url: &str) -> Result<&str, Error> {
    let (_scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| Error::MissingScheme(url.to_owned()))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    Ok(match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Whether both URLs have the same domain. URLs without a scheme match nothing.
pub fn same_domain(a: &str, b: &str) -> bool {
    match (extract_domain(a), extract_domain(b)) {
        (Ok(a), Ok(b)) => a == b,
        (Err(e), _) | (_, Err(e)) => {
            debug!("no domain: {e}");
            false
        }
    }
}

/// The best score among a set of bookmarks, and all bookmarks reaching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch<'a> {
    /// `None` when there were no candidates.
    pub score: Option<Score>,
    /// In iteration order.
    pub bookmarks: Vec<&'a Bookmark>,
}

pub fn find_best_match<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a Bookmark>,
    algorithm: MatchAlgorithm,
) -> BestMatch<'a> {
    let target = target.chars().collect_vec();
    let mut best = BestMatch {
        score: None,
        bookmarks: vec![],
    };
    for bookmark in candidates {
        let url = bookmark.url.chars().collect_vec();
        let score = algorithm.score(&target, &url);
        if best.score.map_or(true, |s| score > s) {
            best.score = Some(score);
            best.bookmarks.clear();
        }
        if best.score == Some(score) {
            best.bookmarks.push(bookmark);
        }
    }
    best
}

/// Outcome of `closest_bookmark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closest<'a> {
    Unique {
        score: Score,
        bookmark: &'a Bookmark,
    },
    Ambiguous {
        score: Score,
        bookmarks: Vec<&'a Bookmark>,
    },
    /// The best score is below the threshold, or there are no bookmarks.
    NoMatch { best_score: Option<Score> },
}

/// Find the bookmark closest to `target`, first among bookmarks on the same
/// domain and then among all bookmarks. A target without a domain skips the
/// first stage.
pub fn closest_bookmark<'a>(
    target: &str,
    roots: &'a [BookmarkNode],
    algorithm: MatchAlgorithm,
    min_score: Score,
) -> Closest<'a> {
    let mut best = match extract_domain(target) {
        Ok(domain) => {
            info!("Stage 1: scan for best matching bookmark on domain {domain}");
            let on_domain = bookmarks(roots).filter(|b| same_domain(target, &b.url));
            find_best_match(target, on_domain, algorithm)
        }
        Err(e) => {
            warn!("{e}");
            BestMatch {
                score: None,
                bookmarks: vec![],
            }
        }
    };

    if best.bookmarks.is_empty() {
        info!("Stage 2: no bookmarks on the same domain, scan all bookmarks");
        best = find_best_match(target, bookmarks(roots), algorithm);
    }

    match best.score {
        Some(score) if score >= min_score => {
            if best.bookmarks.len() == 1 {
                Closest::Unique {
                    score,
                    bookmark: best.bookmarks[0],
                }
            } else {
                warn!(
                    "{} bookmarks share the best score {score}: {}",
                    best.bookmarks.len(),
                    best.bookmarks.iter().map(|b| &b.url).join(", ")
                );
                Closest::Ambiguous {
                    score,
                    bookmarks: best.bookmarks,
                }
            }
        }
        best_score => Closest::NoMatch { best_score },
    }
}
