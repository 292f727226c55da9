//! # covtrack-matrix — Jurisdiction × Program Status Grid
//!
//! Builds the overview matrix: one row per matrix-eligible program, one
//! column per jurisdiction (a synthetic "Federal" column plus the country's
//! states/provinces), each cell holding a coverage status or nothing
//! (rendered as not-applicable).
//!
//! Status propagation is a cascade of per-program strategies — income taxes
//! pin to one side of the grid, universal benefits fan out to every state,
//! block-grant programs default every state to not-started before
//! implementation overrides land. The strategy table and the locality
//! lookup live in [`MatrixConfig`] as data, keeping the cascade's priority
//! order explicit and testable apart from the traversal.
//!
//! [`build_matrix`] is a pure function of the catalog; it is memoized by
//! [`MatrixCache`] and recomputed only on country switch.

pub mod builder;
pub mod cache;
pub mod config;
pub mod level;

pub use builder::{build_matrix, MatrixData, MatrixRow};
pub use cache::MatrixCache;
pub use config::{LocalityMapping, MatrixConfig, PropagationRule};
pub use level::ProgramLevel;
