use thiserror::Error;

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RouterError {
    #[error("route pattern {pattern:?} must start with '/'")]
    MissingLeadingSlash { pattern: String },
    #[error("route pattern {pattern:?} contains an empty segment")]
    EmptySegment { pattern: String },
    #[error("route pattern {pattern:?} has an unnamed parameter")]
    UnnamedParameter { pattern: String },
    #[error("route pattern {pattern:?} uses '*' before the last segment")]
    MisplacedWildcard { pattern: String },
    #[error("route table must end with a catch-all entry")]
    MissingCatchAll,
}
