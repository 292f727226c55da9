//! # Output Rendering
//!
//! Output-format selection and the line formats shared by the table
//! renderers. Status cells use the dashboard's legend symbols
//! (see [`covtrack_core::CoverageStatus::symbol`]).

use clap::ValueEnum;

use covtrack_core::Program;

/// How a subcommand prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// One program as a table line: symbol, id, name, agency, coverage.
pub fn program_line(program: &Program) -> String {
    format!(
        "{} {:<30} {:<42} {:<8} {}",
        program.status.symbol(),
        program.id.as_str(),
        program.name,
        program
            .agency
            .as_ref()
            .map(|a| a.as_str())
            .unwrap_or("-"),
        program.coverage.as_deref().unwrap_or("-"),
    )
}
