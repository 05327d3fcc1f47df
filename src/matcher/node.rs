//! Closed variant set over the concrete matchers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::matcher::kind::MatchKind;
use crate::matcher::traits::Matcher;
use crate::matcher::variants::{
    ContainsMatcher, EndsWithMatcher, EqualsMatcher, StartsWithMatcher,
};

/// One node of a compiled pattern tree.
///
/// The variant set is closed and exhaustive, so planners can switch on a
/// node directly instead of probing capability flags. Equality and hashing
/// are structural over `(variant, pattern, ignore_case)`, which lets
/// repeated sub-patterns across many compiled queries collapse to a single
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatcherNode {
    /// Start-anchored literal match.
    StartsWith(StartsWithMatcher),
    /// End-anchored literal match.
    EndsWith(EndsWithMatcher),
    /// Unanchored substring match.
    Contains(ContainsMatcher),
    /// Fully anchored exact match.
    Equals(EqualsMatcher),
}

macro_rules! for_each_variant {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            MatcherNode::StartsWith($m) => $body,
            MatcherNode::EndsWith($m) => $body,
            MatcherNode::Contains($m) => $body,
            MatcherNode::Equals($m) => $body,
        }
    };
}

impl MatcherNode {
    /// Construct a node of the given kind over a literal pattern.
    pub fn new(kind: MatchKind, pattern: &str, ignore_case: bool) -> Self {
        match (kind, ignore_case) {
            (MatchKind::StartsWith, false) => {
                MatcherNode::StartsWith(StartsWithMatcher::new(pattern))
            }
            (MatchKind::StartsWith, true) => {
                MatcherNode::StartsWith(StartsWithMatcher::ignoring_case(pattern))
            }
            (MatchKind::EndsWith, false) => MatcherNode::EndsWith(EndsWithMatcher::new(pattern)),
            (MatchKind::EndsWith, true) => {
                MatcherNode::EndsWith(EndsWithMatcher::ignoring_case(pattern))
            }
            (MatchKind::Contains, false) => MatcherNode::Contains(ContainsMatcher::new(pattern)),
            (MatchKind::Contains, true) => {
                MatcherNode::Contains(ContainsMatcher::ignoring_case(pattern))
            }
            (MatchKind::Equals, false) => MatcherNode::Equals(EqualsMatcher::new(pattern)),
            (MatchKind::Equals, true) => {
                MatcherNode::Equals(EqualsMatcher::ignoring_case(pattern))
            }
        }
    }

    /// Convenience constructor for a case-sensitive starts-with node.
    pub fn starts_with(pattern: &str) -> Self {
        MatcherNode::StartsWith(StartsWithMatcher::new(pattern))
    }

    /// Convenience constructor for a case-sensitive ends-with node.
    pub fn ends_with(pattern: &str) -> Self {
        MatcherNode::EndsWith(EndsWithMatcher::new(pattern))
    }

    /// Convenience constructor for a case-sensitive contains node.
    pub fn contains(pattern: &str) -> Self {
        MatcherNode::Contains(ContainsMatcher::new(pattern))
    }

    /// Convenience constructor for a case-sensitive equals node.
    pub fn equals(pattern: &str) -> Self {
        MatcherNode::Equals(EqualsMatcher::new(pattern))
    }

    /// Kind tag of this node.
    pub fn kind(&self) -> MatchKind {
        match self {
            MatcherNode::StartsWith(_) => MatchKind::StartsWith,
            MatcherNode::EndsWith(_) => MatchKind::EndsWith,
            MatcherNode::Contains(_) => MatchKind::Contains,
            MatcherNode::Equals(_) => MatchKind::Equals,
        }
    }

    /// Literal pattern this node matches against.
    pub fn pattern(&self) -> &str {
        for_each_variant!(self, m => m.pattern())
    }

    /// Exact byte length accepted strings must have, when the bound is
    /// exact rather than a lower bound. Only the equals variant gives this
    /// stronger guarantee; planners can reject candidates of any other
    /// length without a match attempt.
    pub fn exact_length(&self) -> Option<usize> {
        match self {
            MatcherNode::Equals(m) => Some(m.min_length()),
            _ => None,
        }
    }
}

impl Matcher for MatcherNode {
    fn matches(&self, s: &str, start: usize, length: usize) -> isize {
        for_each_variant!(self, m => m.matches(s, start, length))
    }

    fn prefix(&self) -> Option<&str> {
        for_each_variant!(self, m => m.prefix())
    }

    fn contained_string(&self) -> Option<&str> {
        for_each_variant!(self, m => m.contained_string())
    }

    fn is_prefix_matcher(&self) -> bool {
        for_each_variant!(self, m => m.is_prefix_matcher())
    }

    fn is_contains_matcher(&self) -> bool {
        for_each_variant!(self, m => m.is_contains_matcher())
    }

    fn is_start_anchored(&self) -> bool {
        for_each_variant!(self, m => m.is_start_anchored())
    }

    fn trigrams(&self) -> &BTreeSet<String> {
        for_each_variant!(self, m => m.trigrams())
    }

    fn min_length(&self) -> usize {
        for_each_variant!(self, m => m.min_length())
    }

    fn ignore_case(&self) -> bool {
        for_each_variant!(self, m => m.ignore_case())
    }

    fn could_match(&self, candidate: &str) -> bool {
        for_each_variant!(self, m => m.could_match(candidate))
    }
}

impl fmt::Display for MatcherNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_variant!(self, m => fmt::Display::fmt(m, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::util::NO_MATCH;

    #[test]
    fn test_node_construction_by_kind() {
        let node = MatcherNode::new(MatchKind::EndsWith, ".max", false);
        assert_eq!(node.kind(), MatchKind::EndsWith);
        assert_eq!(node.pattern(), ".max");
        assert_eq!(node.matches("jvm.gc.pause.max", 0, 16), 4);
    }

    #[test]
    fn test_node_delegation() {
        let node = MatcherNode::starts_with("jvm.");
        assert_eq!(node.matches("jvm.gc.pause", 0, 12), 4);
        assert_eq!(node.matches("nodejs.eventLoop", 0, 16), NO_MATCH);
        assert_eq!(node.prefix(), Some("jvm."));
        assert!(node.is_start_anchored());
        assert_eq!(node.min_length(), 4);
    }

    #[test]
    fn test_node_structural_equality_across_kinds() {
        let prefix = MatcherNode::starts_with("abc");
        let contains = MatcherNode::contains("abc");

        // Same literal, different variant tag
        assert_ne!(prefix, contains);
        assert_eq!(prefix, MatcherNode::starts_with("abc"));
    }

    #[test]
    fn test_exact_length_only_for_equals() {
        assert_eq!(MatcherNode::equals("abcd").exact_length(), Some(4));
        assert_eq!(MatcherNode::starts_with("abcd").exact_length(), None);
        assert_eq!(MatcherNode::ends_with("abcd").exact_length(), None);
        assert_eq!(MatcherNode::contains("abcd").exact_length(), None);
    }

    #[test]
    fn test_node_rendering_distinguishes_anchoring() {
        let rendered: Vec<String> = [
            MatcherNode::starts_with("a.b"),
            MatcherNode::ends_with("a.b"),
            MatcherNode::contains("a.b"),
            MatcherNode::equals("a.b"),
        ]
        .iter()
        .map(|n| n.to_string())
        .collect();

        assert_eq!(rendered, ["^a.b", "a.b$", "a.b", "^a.b$"]);
    }
}
