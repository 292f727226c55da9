//! # covtrack CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Covtrack — policy program coverage tracker.
///
/// Lists programs through the dashboard's filter engine, renders the
/// jurisdiction status matrix, summarizes catalogs, and validates catalog
/// files.
#[derive(Parser, Debug)]
#[command(name = "covtrack", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Filter and list catalog programs.
    List(covtrack_cli::list::ListArgs),
    /// Render the jurisdiction status matrix.
    Matrix(covtrack_cli::matrix::MatrixArgs),
    /// Status roll-up and category/agency breakdown.
    Summary(covtrack_cli::summary::SummaryArgs),
    /// Check a catalog file's invariants.
    Validate(covtrack_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => covtrack_cli::list::run(&args),
        Commands::Matrix(args) => covtrack_cli::matrix::run(&args),
        Commands::Summary(args) => covtrack_cli::summary::run(&args),
        Commands::Validate(args) => covtrack_cli::validate::run(&args),
    }
}
