//! # Coverage Status — Single Source of Truth
//!
//! Defines the `CoverageStatus` enum with the four implementation states a
//! program (or one of its per-jurisdiction implementations) can be in. This
//! is the ONE definition used across the workspace; every `match` on
//! `CoverageStatus` must be exhaustive, so adding a state forces every
//! consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CovtrackError;

/// Implementation status of a program or a per-jurisdiction implementation.
///
/// Serialized in the catalog's camelCase wire form:
/// `complete` / `partial` / `inProgress` / `notStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageStatus {
    /// Fully implemented and validated.
    Complete,
    /// Implemented with known gaps.
    Partial,
    /// Actively being implemented.
    InProgress,
    /// No implementation work yet.
    NotStarted,
}

/// Total number of coverage statuses. Used for compile-time assertions.
pub const COVERAGE_STATUS_COUNT: usize = 4;

impl CoverageStatus {
    /// Returns all statuses in canonical display order.
    pub fn all() -> &'static [CoverageStatus] {
        &[
            Self::Complete,
            Self::Partial,
            Self::InProgress,
            Self::NotStarted,
        ]
    }

    /// Returns the camelCase string identifier for this status.
    ///
    /// This must match the serde serialization format and the catalog
    /// JSON schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::InProgress => "inProgress",
            Self::NotStarted => "notStarted",
        }
    }

    /// Human-readable label, as shown in the dashboard legend.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Partial => "Partial",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
        }
    }

    /// One-character legend symbol for grid rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Complete => "✓",
            Self::Partial => "◐",
            Self::InProgress => "⟳",
            Self::NotStarted => "○",
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageStatus {
    type Err = CovtrackError;

    /// Parse a status from its camelCase identifier.
    ///
    /// Accepts the same identifiers produced by [`CoverageStatus::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(Self::Complete),
            "partial" => Ok(Self::Partial),
            "inProgress" => Ok(Self::InProgress),
            "notStarted" => Ok(Self::NotStarted),
            other => Err(CovtrackError::Parse(format!(
                "unknown coverage status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_statuses_count() {
        assert_eq!(CoverageStatus::all().len(), COVERAGE_STATUS_COUNT);
    }

    #[test]
    fn test_all_statuses_unique() {
        let mut seen = std::collections::HashSet::new();
        for s in CoverageStatus::all() {
            assert!(seen.insert(s), "Duplicate status: {s}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for status in CoverageStatus::all() {
            let s = status.as_str();
            let parsed: CoverageStatus = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("nonexistent".parse::<CoverageStatus>().is_err());
        assert!("Complete".parse::<CoverageStatus>().is_err()); // case-sensitive
        assert!("".parse::<CoverageStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in CoverageStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            let expected = format!("\"{}\"", status.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for status in CoverageStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            let parsed: CoverageStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_symbols_distinct() {
        let mut seen = std::collections::HashSet::new();
        for s in CoverageStatus::all() {
            assert!(seen.insert(s.symbol()));
        }
    }
}
