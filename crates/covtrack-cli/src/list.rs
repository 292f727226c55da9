//! # List Subcommand
//!
//! Runs the filter engine over a catalog and prints the matching rows,
//! mirroring the dashboard's program list.

use clap::Args;

use covtrack_filter::{
    filter_programs, AgencySelection, FilterConfig, FilterState, JurisdictionSelection,
};

use crate::input::CatalogArgs;
use crate::render::{program_line, OutputFormat};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Free-text search; overrides every other filter.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Level focus: all, federal, or state-local.
    #[arg(long, default_value = "all")]
    pub level: String,

    /// Status filter: all, complete, partial, inProgress, or notStarted.
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Agency filter (federal view only).
    #[arg(long)]
    pub agency: Option<String>,

    /// Jurisdiction filter (state-local view only), e.g. CA.
    #[arg(long)]
    pub state: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl ListArgs {
    /// Build the engine's filter state from the flags.
    pub fn filter_state(&self) -> anyhow::Result<FilterState> {
        let mut state = FilterState::default().with_search(self.search.clone());
        state.level_mode = self.level.parse()?;
        state.status = self.status.parse()?;
        if let Some(agency) = &self.agency {
            state.agency = AgencySelection::parse(agency);
        }
        if let Some(code) = &self.state {
            state.jurisdiction = JurisdictionSelection::parse(code);
        }
        Ok(state)
    }
}

/// Run `covtrack list`.
pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    let programs = args.catalog.programs()?;
    let state = args.filter_state()?;
    let rows = filter_programs(&programs, &state, &FilterConfig::default());
    tracing::debug!(total = programs.len(), matched = rows.len(), "filtered catalog");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            for row in &rows {
                println!("{}", program_line(row));
            }
            println!("{} program(s)", rows.len());
        }
    }
    Ok(())
}
