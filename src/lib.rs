//! Compact literal-pattern matching core for filtering high-cardinality
//! identifier streams (metric names, tags) without running a full regex
//! engine per candidate.
//!
//! A pattern compiler (external to this crate) extracts literal
//! sub-patterns from user queries and builds [`MatcherNode`] trees. A query
//! planner then uses the cheap per-matcher metadata — trigram sets,
//! minimum lengths, anchoring flags — to reject most candidates before ever
//! calling [`Matcher::matches`].
//!
//! # Example
//!
//! ```
//! use namesieve::{Matcher, MatcherNode, NO_MATCH};
//!
//! let node = MatcherNode::starts_with("jvm.gc.");
//!
//! // Cheap rejection first, exact match only for survivors.
//! let candidate = "jvm.gc.pause";
//! assert!(node.could_match(candidate));
//! assert_eq!(node.matches(candidate, 0, candidate.len()), 7);
//!
//! assert_eq!(node.matches("nodejs.eventLoop", 0, 16), NO_MATCH);
//! assert!(node.trigrams().contains("jvm"));
//! assert_eq!(node.to_string(), "^jvm.gc.");
//! ```
//!
//! Matchers are immutable, structurally comparable values: two nodes built
//! from the same `(kind, pattern, ignore_case)` are equal, hash alike, and
//! share their interned pattern storage, so repeated sub-patterns across
//! many compiled queries deduplicate naturally.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub use error::{Error, Result};
pub use matcher::{
    compute_trigrams, consumed, escape, intern_literal, ContainsMatcher, EndsWithMatcher,
    EqualsMatcher, LiteralInterner, MatchKind, Matcher, MatcherNode, StartsWithMatcher, NO_MATCH,
};

/// Error types
pub mod error;

/// Matcher contract and concrete variants
pub mod matcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
