use thiserror::Error;

/// Errors at the edges of the crate. The distance and score functions
/// themselves are total and never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("url {0:?} contains no scheme (expected `scheme://`)")]
    MissingScheme(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
