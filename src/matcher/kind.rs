//! Kind tags for the closed matcher variant set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifies one of the concrete matcher variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Accepts strings beginning with the pattern.
    StartsWith,
    /// Accepts strings ending with the pattern.
    EndsWith,
    /// Accepts strings containing the pattern anywhere.
    Contains,
    /// Accepts strings equal to the pattern.
    Equals,
}

impl MatchKind {
    /// Stable name used in configuration and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::StartsWith => "starts_with",
            MatchKind::EndsWith => "ends_with",
            MatchKind::Contains => "contains",
            MatchKind::Equals => "equals",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starts_with" => Ok(MatchKind::StartsWith),
            "ends_with" => Ok(MatchKind::EndsWith),
            "contains" => Ok(MatchKind::Contains),
            "equals" => Ok(MatchKind::Equals),
            other => Err(Error::UnknownMatchKind(other.to_string())),
        }
    }
}
