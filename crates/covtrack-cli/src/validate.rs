//! # Validate Subcommand
//!
//! Loads a catalog file and checks its invariants, reporting the first
//! violation. The process exit status carries the verdict.

use std::path::PathBuf;

use clap::Args;

use covtrack_catalog::{load_catalog, validate_catalog};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The catalog file to check (.json, .yaml, or .yml).
    #[arg(long)]
    pub catalog: PathBuf,
}

/// Run `covtrack validate`.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let programs = load_catalog(&args.catalog)?;
    validate_catalog(&programs)?;
    println!("ok: {} program(s)", programs.len());
    Ok(())
}
