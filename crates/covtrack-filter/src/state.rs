//! # Filter State
//!
//! The UI-side filter selections the engine projects the catalog through.
//! `FilterState` is plain data with value equality, so it doubles as the
//! memoization key for [`crate::FilterCache`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use covtrack_core::{CovtrackError, CoverageStatus, JurisdictionCode};

/// Which government level the dashboard is focused on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelMode {
    /// Every catalog program, un-expanded.
    #[default]
    All,
    /// Federal/national programs only; parents kept, implementations dropped.
    Federal,
    /// State and local view; parents replaced by per-jurisdiction rows.
    StateLocal,
}

impl LevelMode {
    /// Kebab-case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Federal => "federal",
            Self::StateLocal => "state-local",
        }
    }
}

impl std::fmt::Display for LevelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelMode {
    type Err = CovtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "federal" => Ok(Self::Federal),
            "state-local" => Ok(Self::StateLocal),
            other => Err(CovtrackError::Parse(format!("unknown level mode: {other:?}"))),
        }
    }
}

/// Status selection: a specific status or no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusSelection {
    /// No status constraint.
    #[default]
    All,
    /// Keep only rows with this status.
    Only(CoverageStatus),
}

impl StatusSelection {
    /// Whether `status` passes this selection.
    pub fn admits(&self, status: CoverageStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == *wanted,
        }
    }
}

impl FromStr for StatusSelection {
    type Err = CovtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.parse()?))
        }
    }
}

/// Agency selection: a named agency or no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AgencySelection {
    /// No agency constraint.
    #[default]
    All,
    /// Keep only rows owned by this agency (plus configured category
    /// fallbacks).
    Agency(String),
}

impl AgencySelection {
    /// Parse the picker value, where `All` is the no-constraint sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            Self::All
        } else {
            Self::Agency(value.to_string())
        }
    }
}

/// Jurisdiction selection: a specific code or no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum JurisdictionSelection {
    /// No jurisdiction constraint.
    #[default]
    All,
    /// Focus on one jurisdiction.
    Code(JurisdictionCode),
}

impl JurisdictionSelection {
    /// Parse the picker value, where `All` is the no-constraint sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            Self::All
        } else {
            Self::Code(JurisdictionCode::new(value))
        }
    }
}

/// The complete filter state of the dashboard.
///
/// A non-empty `search_query` takes precedence over every other field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search. Non-empty means: search everything, ignore the rest.
    pub search_query: String,
    /// Level focus.
    pub level_mode: LevelMode,
    /// Status constraint.
    pub status: StatusSelection,
    /// Agency constraint (federal mode only).
    pub agency: AgencySelection,
    /// Jurisdiction constraint (state-local mode only).
    pub jurisdiction: JurisdictionSelection,
}

impl FilterState {
    /// Replace the search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Replace the level mode.
    pub fn with_level(mut self, mode: LevelMode) -> Self {
        self.level_mode = mode;
        self
    }

    /// Replace the status selection.
    pub fn with_status(mut self, status: CoverageStatus) -> Self {
        self.status = StatusSelection::Only(status);
        self
    }

    /// Replace the agency selection.
    pub fn with_agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = AgencySelection::Agency(agency.into());
        self
    }

    /// Replace the jurisdiction selection.
    pub fn with_jurisdiction(mut self, code: impl Into<String>) -> Self {
        self.jurisdiction = JurisdictionSelection::Code(JurisdictionCode::new(code));
        self
    }
}
