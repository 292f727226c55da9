//! # Status Roll-Up
//!
//! Summarizes a catalog into one count per status for the dashboard's
//! headline cards. Each catalog program contributes exactly one count;
//! synthesized per-state rows never feed this, so a parent rolls its
//! implementation mix up to a single status first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use covtrack_core::{CoverageStatus, Program, ProgramId};

/// Counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Fully implemented programs.
    pub complete: usize,
    /// Partially implemented programs.
    pub partial: usize,
    /// Programs under active development.
    pub in_progress: usize,
    /// Unimplemented programs.
    pub not_started: usize,
}

impl StatusCounts {
    /// Total programs counted.
    pub fn total(&self) -> usize {
        self.complete + self.partial + self.in_progress + self.not_started
    }

    fn bump(&mut self, status: CoverageStatus) {
        match status {
            CoverageStatus::Complete => self.complete += 1,
            CoverageStatus::Partial => self.partial += 1,
            CoverageStatus::InProgress => self.in_progress += 1,
            CoverageStatus::NotStarted => self.not_started += 1,
        }
    }
}

/// Roll-up overrides that vary by catalog revision.
#[derive(Debug, Clone, Default)]
pub struct RollupConfig {
    /// Ids counted as partial outright, regardless of their own status or
    /// implementation mix.
    pub force_partial: HashSet<ProgramId>,
}

impl RollupConfig {
    /// The override set observed in the US catalog: TANF counts as one
    /// partial program (a mix of implemented and missing states).
    pub fn us() -> Self {
        Self {
            force_partial: [ProgramId::new("tanf")].into_iter().collect(),
        }
    }
}

/// Count programs by status.
///
/// State- and local-agency programs count by their own status. A parent
/// program contributes the "worst" status present in its implementation
/// mix, in the precedence inProgress > partial > complete > notStarted.
/// Everything else counts by its own status.
pub fn status_counts(programs: &[Program], config: &RollupConfig) -> StatusCounts {
    let mut counts = StatusCounts::default();

    for program in programs {
        if program.has_sub_federal_agency() {
            counts.bump(program.status);
            continue;
        }

        if config.force_partial.contains(&program.id) {
            counts.partial += 1;
        } else if program.is_parent() {
            let statuses: HashSet<CoverageStatus> = program
                .implementations()
                .iter()
                .map(|imp| imp.status)
                .collect();
            if statuses.contains(&CoverageStatus::InProgress) {
                counts.in_progress += 1;
            } else if statuses.contains(&CoverageStatus::Partial) {
                counts.partial += 1;
            } else if statuses.contains(&CoverageStatus::Complete) {
                counts.complete += 1;
            } else if statuses.contains(&CoverageStatus::NotStarted) {
                counts.not_started += 1;
            }
        } else {
            counts.bump(program.status);
        }
    }

    counts
}
