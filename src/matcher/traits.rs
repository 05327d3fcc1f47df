//! The matcher contract shared by every concrete variant.

use memchr::memmem;
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::matcher::util::NO_MATCH;

/// Decision procedure testing a literal pattern against a string window.
///
/// Implementations are immutable value objects: every method is a pure
/// function of the construction-time state and the arguments, so instances
/// are freely shared across threads without synchronization.
///
/// Offsets and lengths are byte-based. Case-insensitive comparison folds
/// ASCII case only.
pub trait Matcher: Debug + Send + Sync {
    /// Attempt to match against the window `[start, start + length)` of `s`.
    ///
    /// Returns the number of bytes consumed by a successful match, or
    /// [`NO_MATCH`]. The caller must pass an in-bounds window; this is an
    /// unchecked precondition, not a runtime-validated error. Start-anchored
    /// variants are only ever invoked with `start == 0` by the pattern-tree
    /// builder and evaluate from the beginning of `s`.
    fn matches(&self, s: &str, start: usize, length: usize) -> isize;

    /// Literal guaranteed at the very start of any accepted string, if one
    /// exists.
    fn prefix(&self) -> Option<&str>;

    /// Literal guaranteed to occur somewhere in any accepted string, if one
    /// exists.
    fn contained_string(&self) -> Option<&str>;

    /// True when this variant carries a prefix guarantee.
    fn is_prefix_matcher(&self) -> bool;

    /// True when this variant carries a contained-substring guarantee.
    fn is_contains_matcher(&self) -> bool;

    /// True when acceptance is anchored to the start of the string.
    fn is_start_anchored(&self) -> bool;

    /// Trigrams required to appear in any accepted string.
    ///
    /// Sound for exclusion: a candidate missing one of these cannot match.
    /// An empty set means trigram filtering is unavailable for this matcher,
    /// not that nothing matches. Computed lazily and cached per instance.
    fn trigrams(&self) -> &BTreeSet<String>;

    /// Lower bound on the byte length of any accepted string.
    fn min_length(&self) -> usize;

    /// Whether comparisons fold ASCII case.
    fn ignore_case(&self) -> bool;

    /// Cheap, sound pre-check against a whole candidate string.
    ///
    /// Combines the length bound with a contained-substring scan. Never
    /// returns `false` for a candidate that `matches` would accept, so a
    /// caller may skip the exact match for rejected candidates.
    fn could_match(&self, candidate: &str) -> bool {
        if candidate.len() < self.min_length() {
            return false;
        }
        // Folded comparisons make the literal scan unsound, so only the
        // length bound applies.
        if self.ignore_case() {
            return true;
        }
        match self.contained_string() {
            Some(literal) if !literal.is_empty() => {
                memmem::find(candidate.as_bytes(), literal.as_bytes()).is_some()
            }
            _ => true,
        }
    }
}

/// Convert a raw `matches` result into an `Option` of consumed bytes.
pub fn consumed(result: isize) -> Option<usize> {
    if result == NO_MATCH {
        None
    } else {
        Some(result as usize)
    }
}
