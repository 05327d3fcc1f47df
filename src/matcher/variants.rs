//! Concrete matcher variants.
//!
//! Each variant is an immutable value over `(pattern, ignore_case)` with a
//! lazily computed trigram cache. Equality and hashing are structural and
//! cover only the pattern and the case flag, so two matchers describing the
//! same logical pattern collapse to one entry in any map or set a planner
//! keeps. The cache never participates in equality and is skipped by serde.

use memchr::memmem;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::matcher::intern::intern_literal;
use crate::matcher::traits::Matcher;
use crate::matcher::util::{compute_trigrams, escape, NO_MATCH};

fn trigrams_for(pattern: &str, ignore_case: bool) -> BTreeSet<String> {
    // Folded matching accepts strings that carry none of the pattern's
    // trigrams verbatim, so exposing them would cause false exclusions.
    if ignore_case {
        BTreeSet::new()
    } else {
        compute_trigrams(pattern)
    }
}

/// Matcher that checks if the string starts with the pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartsWithMatcher {
    pattern: Arc<str>,
    ignore_case: bool,
    #[serde(skip)]
    trigrams: OnceCell<BTreeSet<String>>,
}

impl StartsWithMatcher {
    /// Create a case-sensitive instance.
    pub fn new(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, false)
    }

    /// Create an instance folding ASCII case.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, true)
    }

    fn with_ignore_case(pattern: &str, ignore_case: bool) -> Self {
        Self {
            pattern: intern_literal(pattern),
            ignore_case,
            trigrams: OnceCell::new(),
        }
    }

    /// Pattern checked for at the start of the string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for StartsWithMatcher {
    // Start-anchored: evaluates from position 0 of `s` regardless of the
    // window, relying on the tree-builder invariant that anchored matchers
    // only run at the start.
    fn matches(&self, s: &str, _start: usize, _length: usize) -> isize {
        let pattern = self.pattern.as_bytes();
        let subject = s.as_bytes();
        if subject.len() < pattern.len() {
            return NO_MATCH;
        }
        let matched = if self.ignore_case {
            subject[..pattern.len()].eq_ignore_ascii_case(pattern)
        } else {
            &subject[..pattern.len()] == pattern
        };
        if matched {
            pattern.len() as isize
        } else {
            NO_MATCH
        }
    }

    fn prefix(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn contained_string(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn is_prefix_matcher(&self) -> bool {
        true
    }

    fn is_contains_matcher(&self) -> bool {
        true
    }

    fn is_start_anchored(&self) -> bool {
        true
    }

    fn trigrams(&self) -> &BTreeSet<String> {
        self.trigrams
            .get_or_init(|| trigrams_for(&self.pattern, self.ignore_case))
    }

    fn min_length(&self) -> usize {
        self.pattern.len()
    }

    fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl fmt::Display for StartsWithMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", escape(&self.pattern))
    }
}

impl PartialEq for StartsWithMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_case == other.ignore_case && self.pattern == other.pattern
    }
}

impl Eq for StartsWithMatcher {}

impl Hash for StartsWithMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.ignore_case.hash(state);
    }
}

/// Matcher that checks if the string ends with the pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndsWithMatcher {
    pattern: Arc<str>,
    ignore_case: bool,
    #[serde(skip)]
    trigrams: OnceCell<BTreeSet<String>>,
}

impl EndsWithMatcher {
    /// Create a case-sensitive instance.
    pub fn new(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, false)
    }

    /// Create an instance folding ASCII case.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, true)
    }

    fn with_ignore_case(pattern: &str, ignore_case: bool) -> Self {
        Self {
            pattern: intern_literal(pattern),
            ignore_case,
            trigrams: OnceCell::new(),
        }
    }

    /// Pattern checked for at the end of the string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for EndsWithMatcher {
    fn matches(&self, s: &str, start: usize, length: usize) -> isize {
        let pattern = self.pattern.as_bytes();
        let window = &s.as_bytes()[start..start + length];
        if window.len() < pattern.len() {
            return NO_MATCH;
        }
        let tail = &window[window.len() - pattern.len()..];
        let matched = if self.ignore_case {
            tail.eq_ignore_ascii_case(pattern)
        } else {
            tail == pattern
        };
        if matched {
            pattern.len() as isize
        } else {
            NO_MATCH
        }
    }

    fn prefix(&self) -> Option<&str> {
        None
    }

    fn contained_string(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn is_prefix_matcher(&self) -> bool {
        false
    }

    fn is_contains_matcher(&self) -> bool {
        true
    }

    fn is_start_anchored(&self) -> bool {
        false
    }

    fn trigrams(&self) -> &BTreeSet<String> {
        self.trigrams
            .get_or_init(|| trigrams_for(&self.pattern, self.ignore_case))
    }

    fn min_length(&self) -> usize {
        self.pattern.len()
    }

    fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl fmt::Display for EndsWithMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}$", escape(&self.pattern))
    }
}

impl PartialEq for EndsWithMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_case == other.ignore_case && self.pattern == other.pattern
    }
}

impl Eq for EndsWithMatcher {}

impl Hash for EndsWithMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.ignore_case.hash(state);
    }
}

/// Matcher that checks if the pattern occurs anywhere in the string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainsMatcher {
    pattern: Arc<str>,
    ignore_case: bool,
    #[serde(skip)]
    trigrams: OnceCell<BTreeSet<String>>,
}

impl ContainsMatcher {
    /// Create a case-sensitive instance.
    pub fn new(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, false)
    }

    /// Create an instance folding ASCII case.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, true)
    }

    fn with_ignore_case(pattern: &str, ignore_case: bool) -> Self {
        Self {
            pattern: intern_literal(pattern),
            ignore_case,
            trigrams: OnceCell::new(),
        }
    }

    /// Pattern searched for within the string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for ContainsMatcher {
    fn matches(&self, s: &str, start: usize, length: usize) -> isize {
        let pattern = self.pattern.as_bytes();
        if pattern.is_empty() {
            return 0;
        }
        let window = &s.as_bytes()[start..start + length];
        let found = if self.ignore_case {
            window.len() >= pattern.len()
                && window
                    .windows(pattern.len())
                    .any(|w| w.eq_ignore_ascii_case(pattern))
        } else {
            memmem::find(window, pattern).is_some()
        };
        if found {
            pattern.len() as isize
        } else {
            NO_MATCH
        }
    }

    fn prefix(&self) -> Option<&str> {
        None
    }

    fn contained_string(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn is_prefix_matcher(&self) -> bool {
        false
    }

    fn is_contains_matcher(&self) -> bool {
        true
    }

    fn is_start_anchored(&self) -> bool {
        false
    }

    fn trigrams(&self) -> &BTreeSet<String> {
        self.trigrams
            .get_or_init(|| trigrams_for(&self.pattern, self.ignore_case))
    }

    fn min_length(&self) -> usize {
        self.pattern.len()
    }

    fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl fmt::Display for ContainsMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape(&self.pattern))
    }
}

impl PartialEq for ContainsMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_case == other.ignore_case && self.pattern == other.pattern
    }
}

impl Eq for ContainsMatcher {}

impl Hash for ContainsMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.ignore_case.hash(state);
    }
}

/// Matcher that checks if the string equals the pattern exactly.
///
/// `min_length` is exact for this variant: a candidate whose length differs
/// from the pattern's can be rejected outright, which planners may
/// special-case via [`crate::MatcherNode::exact_length`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqualsMatcher {
    pattern: Arc<str>,
    ignore_case: bool,
    #[serde(skip)]
    trigrams: OnceCell<BTreeSet<String>>,
}

impl EqualsMatcher {
    /// Create a case-sensitive instance.
    pub fn new(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, false)
    }

    /// Create an instance folding ASCII case.
    pub fn ignoring_case(pattern: &str) -> Self {
        Self::with_ignore_case(pattern, true)
    }

    fn with_ignore_case(pattern: &str, ignore_case: bool) -> Self {
        Self {
            pattern: intern_literal(pattern),
            ignore_case,
            trigrams: OnceCell::new(),
        }
    }

    /// Pattern the string must equal.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for EqualsMatcher {
    fn matches(&self, s: &str, start: usize, length: usize) -> isize {
        let pattern = self.pattern.as_bytes();
        let window = &s.as_bytes()[start..start + length];
        if window.len() != pattern.len() {
            return NO_MATCH;
        }
        let matched = if self.ignore_case {
            window.eq_ignore_ascii_case(pattern)
        } else {
            window == pattern
        };
        if matched {
            pattern.len() as isize
        } else {
            NO_MATCH
        }
    }

    fn prefix(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn contained_string(&self) -> Option<&str> {
        Some(&self.pattern)
    }

    fn is_prefix_matcher(&self) -> bool {
        true
    }

    fn is_contains_matcher(&self) -> bool {
        true
    }

    fn is_start_anchored(&self) -> bool {
        true
    }

    fn trigrams(&self) -> &BTreeSet<String> {
        self.trigrams
            .get_or_init(|| trigrams_for(&self.pattern, self.ignore_case))
    }

    fn min_length(&self) -> usize {
        self.pattern.len()
    }

    fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    // The length bound is exact for this variant.
    fn could_match(&self, candidate: &str) -> bool {
        candidate.len() == self.pattern.len()
    }
}

impl fmt::Display for EqualsMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}$", escape(&self.pattern))
    }
}

impl PartialEq for EqualsMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_case == other.ignore_case && self.pattern == other.pattern
    }
}

impl Eq for EqualsMatcher {}

impl Hash for EqualsMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.ignore_case.hash(state);
    }
}
