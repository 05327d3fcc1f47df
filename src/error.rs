//! Error types

use thiserror::Error;

/// Errors raised at matcher construction boundaries.
///
/// Matching itself is total: once a matcher exists, `matches` and every
/// metadata accessor succeed for any in-bounds window. Failures can only
/// happen while turning external input into a matcher description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A kind name from configuration or a diagnostic dump was not one of
    /// the known matcher kinds.
    #[error("unknown match kind: {0:?}")]
    UnknownMatchKind(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
