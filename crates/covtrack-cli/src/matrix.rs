//! # Matrix Subcommand
//!
//! Builds the jurisdiction × program status grid and renders it per level:
//! federal rows against the national column, state and local rows against
//! their primary jurisdiction.

use clap::Args;

use covtrack_core::{Country, CountryCode, CoverageStatus, JurisdictionCode};
use covtrack_matrix::{build_matrix, MatrixConfig, MatrixData, MatrixRow};

use crate::input::CatalogArgs;
use crate::render::OutputFormat;

/// Arguments for the matrix subcommand.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// The matrix configuration for a country: the observed US tables, or the
/// bare column universe elsewhere.
pub fn config_for(code: CountryCode) -> MatrixConfig {
    match code {
        CountryCode::Us => MatrixConfig::us(),
        other => MatrixConfig::for_country(Country::get(other)),
    }
}

/// Run `covtrack matrix`.
pub fn run(args: &MatrixArgs) -> anyhow::Result<()> {
    let code = args.catalog.country_code()?;
    let programs = args.catalog.programs()?;
    let config = config_for(code);
    let data = build_matrix(&programs, &config);
    tracing::debug!(rows = data.rows.len(), columns = data.columns.len(), "built matrix");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Table => render_table(&data),
    }
    Ok(())
}

fn render_table(data: &MatrixData) {
    let federal_column = JurisdictionCode::federal();

    println!("Federal programs:");
    for row in &data.federal_rows {
        println!("  {} {}", cell(row.status(&federal_column)), row.name);
    }

    println!("State programs:");
    for row in &data.state_rows {
        print_regional(row, &data.columns);
    }

    println!("Local programs:");
    for row in &data.local_rows {
        print_regional(row, &data.columns);
    }
}

fn print_regional(row: &MatrixRow, columns: &[JurisdictionCode]) {
    match row.primary_jurisdiction(columns) {
        Some(column) => println!(
            "  {:<6} {} {}",
            column.as_str(),
            cell(row.status(column)),
            row.name
        ),
        None => println!("  {:<6} {} {}", "-", cell(None), row.name),
    }
}

fn cell(status: Option<CoverageStatus>) -> &'static str {
    match status {
        Some(status) => status.symbol(),
        None => "·",
    }
}
