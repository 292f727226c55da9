//! # Summary Subcommand
//!
//! Prints the catalog's headline numbers: one count per status, then the
//! category/agency breakdown.

use clap::Args;
use serde::Serialize;

use covtrack_catalog::{program_breakdown, status_counts, ProgramBreakdown, RollupConfig, StatusCounts};
use covtrack_core::{CountryCode, CoverageStatus};

use crate::input::CatalogArgs;
use crate::render::OutputFormat;

/// Arguments for the summary subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    status_counts: StatusCounts,
    breakdown: ProgramBreakdown,
}

/// Run `covtrack summary`.
pub fn run(args: &SummaryArgs) -> anyhow::Result<()> {
    let code = args.catalog.country_code()?;
    let programs = args.catalog.programs()?;
    let rollup = match code {
        CountryCode::Us => RollupConfig::us(),
        _ => RollupConfig::default(),
    };

    let summary = Summary {
        status_counts: status_counts(&programs, &rollup),
        breakdown: program_breakdown(&programs),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => {
            let counts = &summary.status_counts;
            println!("Programs: {}", counts.total());
            for (status, count) in [
                (CoverageStatus::Complete, counts.complete),
                (CoverageStatus::Partial, counts.partial),
                (CoverageStatus::InProgress, counts.in_progress),
                (CoverageStatus::NotStarted, counts.not_started),
            ] {
                println!("  {} {:<12} {}", status.symbol(), status.label(), count);
            }

            println!("By agency:");
            for entry in &summary.breakdown.by_agency {
                println!("  {:<20} {}", entry.name, entry.count);
            }
            println!("By category:");
            for entry in &summary.breakdown.by_category {
                println!("  {:<20} {}", entry.name, entry.count);
            }
            println!(
                "Implementation states: {}",
                summary.breakdown.total_states
            );
        }
    }
    Ok(())
}
