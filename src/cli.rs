use clap::{value_parser, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{config::MIN_MATCH_SCORE, MatchAlgorithm};

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// Without a command, print the edit distance of a fixed example pair.
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Serialize, Deserialize, Debug)]
pub enum Command {
    /// Edit distance between two strings.
    Distance {
        a: String,
        b: String,

        /// Evaluate the recurrence top-down through the memoizer instead of
        /// filling a table.
        #[arg(long)]
        memo: bool,

        /// Print memoizer statistics to stderr. Implies `--memo`.
        #[arg(long)]
        stats: bool,
    },
    /// Number of matching characters between two strings.
    Score {
        a: String,
        b: String,

        #[clap(short, long, default_value_t, value_enum)]
        algorithm: MatchAlgorithm,
    },
    /// Find the bookmark whose url is closest to the given url.
    Closest {
        url: String,

        #[clap(flatten)]
        search: SearchArgs,
    },
}

#[derive(Parser, Serialize, Deserialize, Debug, Clone)]
#[clap(next_help_heading = "Search")]
pub struct SearchArgs {
    /// JSON file with the bookmark tree.
    #[clap(short, long, value_parser = value_parser!(PathBuf))]
    pub bookmarks: PathBuf,

    #[clap(short, long, default_value_t, value_enum)]
    pub algorithm: MatchAlgorithm,

    /// Minimal number of matching characters.
    #[clap(long, default_value_t = MIN_MATCH_SCORE)]
    pub min_score: usize,
}
