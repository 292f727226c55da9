//! # Program Level
//!
//! Which government level a matrix row is bucketed under.

use serde::{Deserialize, Serialize};

/// Government level of a matrix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLevel {
    /// Federal/national programs (including statewide programs that exist
    /// in every jurisdiction, like state income taxes).
    Federal,
    /// Programs owned by a single state/province.
    State,
    /// County- and city-level programs.
    Local,
}

impl ProgramLevel {
    /// Lowercase identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State => "state",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for ProgramLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
