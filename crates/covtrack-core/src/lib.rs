//! # covtrack-core — Foundational Types for the Coverage Dashboard
//!
//! This crate is the bedrock of the Covtrack workspace. It defines the
//! program catalog model and the small vocabulary of domain primitives the
//! derivation crates operate over. Every other crate in the workspace
//! depends on `covtrack-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProgramId`, `Agency`,
//!    `JurisdictionCode` — no bare strings for identifiers.
//!
//! 2. **Catalog records are immutable inputs.** `Program` and
//!    `StateImplementation` are loaded once and never written back.
//!    Jurisdiction-specific rows are synthesized on demand through the one
//!    named constructor, [`Program::state_variant`], so the fields a
//!    synthesized row inherits cannot drift between call sites.
//!
//! 3. **Total transformations.** Optional fields are handled by falling
//!    back to a default or omitting a row, never by panicking. Errors exist
//!    only at the parsing boundary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `covtrack-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod country;
pub mod error;
pub mod jurisdiction;
pub mod memo;
pub mod program;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use country::{Country, CountryCode};
pub use error::CovtrackError;
pub use jurisdiction::{Jurisdiction, JurisdictionCode};
pub use memo::DerivedCache;
pub use program::{Agency, GithubLinks, Program, ProgramId, StateImplementation};
pub use status::{CoverageStatus, COVERAGE_STATUS_COUNT};
