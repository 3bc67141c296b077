use thiserror::Error;

/// Errors returned by the fallible entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One of the input sequences was absent. Holds the side, `"older"` or `"newer"`.
    #[error("invalid argument: {0} sequence is absent")]
    InvalidArgument(&'static str),
    /// The minimal edit script is longer than the configured bound.
    #[error("edit distance exceeds the configured limit of {limit}")]
    EditLimitExceeded { limit: usize },
}
