//! Constants used throughout the code, that may eventually be turned into
//! configurable options.

/// The closest bookmark must share at least this many characters with the
/// target URL.
pub const MIN_MATCH_SCORE: usize = 10;

/// The pair whose edit distance is printed when no command is given.
pub const EXAMPLE_PAIR: (&str, &str) = ("aaxxxxxxxxxxxxxxbbyycc", "aasssbbtttttttttttttcc");
