//! Shared constants and helpers for the matcher variants.

use std::borrow::Cow;
use std::collections::BTreeSet;

/// Sentinel returned by [`crate::Matcher::matches`] when the pattern does
/// not match. Any successful match consumes zero or more bytes, so the
/// sentinel is distinguishable from every valid result.
pub const NO_MATCH: isize = -1;

const ANCHOR_START: char = '^';
const ANCHOR_END: char = '$';
const ESCAPE: char = '\\';

/// Compute the set of trigrams for a literal.
///
/// A trigram is a contiguous 3-character substring. Any string matched
/// against the literal must contain every one of them, which makes the set
/// usable as a sound exclusion filter: a candidate missing a trigram cannot
/// match. Literals shorter than three characters produce an empty set,
/// meaning "no trigram filtering possible", never "no match possible".
pub fn compute_trigrams(literal: &str) -> BTreeSet<String> {
    let chars: Vec<char> = literal.chars().collect();
    let mut trigrams = BTreeSet::new();
    if chars.len() >= 3 {
        for window in chars.windows(3) {
            trigrams.insert(window.iter().collect());
        }
    }
    trigrams
}

/// Escape a literal for diagnostic rendering (zero-copy when clean).
///
/// The rendered form of a matcher wraps its literal in anchor markers, so
/// `^`, `$`, and `\` inside the literal are backslash-escaped and control
/// characters are written out as `\t`, `\n`, `\r`, or `\u{XXXX}`. The result
/// is unambiguous in log output regardless of the literal's content.
pub fn escape(literal: &str) -> Cow<'_, str> {
    let clean = !literal
        .chars()
        .any(|c| matches!(c, ANCHOR_START | ANCHOR_END | ESCAPE) || c.is_control());
    if clean {
        return Cow::Borrowed(literal);
    }

    let mut out = String::with_capacity(literal.len() + 4);
    for c in literal.chars() {
        match c {
            ANCHOR_START | ANCHOR_END | ESCAPE => {
                out.push(ESCAPE);
                out.push(c);
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{{{:04x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
