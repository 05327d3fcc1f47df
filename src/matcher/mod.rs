//! Matcher contract, concrete variants, and pre-filter metadata.

pub mod intern;
pub mod kind;
pub mod node;
pub mod traits;
pub mod util;
pub mod variants;

pub use intern::{intern_literal, LiteralInterner};
pub use kind::MatchKind;
pub use node::MatcherNode;
pub use traits::{consumed, Matcher};
pub use util::{compute_trigrams, escape, NO_MATCH};
pub use variants::{ContainsMatcher, EndsWithMatcher, EqualsMatcher, StartsWithMatcher};
