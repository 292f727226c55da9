//! # covtrack-filter — Program Expansion/Filter Engine
//!
//! Turns the flat program catalog plus the dashboard's filter state into the
//! list of display-ready rows. The one non-trivial move is level-based
//! expansion: in jurisdiction-focused views a parent program is replaced by
//! one synthesized row per `StateImplementation`, while federal views keep
//! the parent and drop the sub-implementations.
//!
//! [`filter_programs`] is a pure, deterministic projection — no side
//! effects, no errors. Malformed or unmatched coverage text excludes a row
//! silently; that is accepted behavior, not a failure.
//!
//! The hardcoded product tables (county/city place names per state, agency
//! category fallbacks, always-statewide program ids) live in
//! [`FilterConfig`] so they can be extended and tested independently of the
//! traversal logic.

pub mod cache;
pub mod config;
pub mod engine;
pub mod state;

pub use cache::FilterCache;
pub use config::{CoveragePattern, FilterConfig, LocalityRule};
pub use engine::filter_programs;
pub use state::{AgencySelection, FilterState, JurisdictionSelection, LevelMode, StatusSelection};
