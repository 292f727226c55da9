//! # covtrack-cli — Coverage Tracker Command-Line Interface
//!
//! Terminal front end over the Covtrack derivation crates.
//!
//! ## Subcommands
//!
//! - `list` — run the filter engine and print the matching programs
//! - `matrix` — build and render the jurisdiction status grid
//! - `summary` — status roll-up counts and category/agency breakdown
//! - `validate` — load a catalog file and check its invariants
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates — no derivation logic
//!   here, only input resolution and rendering.

pub mod input;
pub mod list;
pub mod matrix;
pub mod render;
pub mod summary;
pub mod validate;
