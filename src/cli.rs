//! Command-line argument parsing for the scenario runner
//!
//! Supports:
//! - Replaying a scenario file
//! - JSON output instead of the tree view
//! - Forcing tabbed panels to hide their title bars

use clap::Parser;
use std::path::PathBuf;

/// Replay a docking scenario and print the resulting layout
#[derive(Parser, Debug)]
#[command(name = "dockhand", version, about = "Replay a docking scenario")]
pub struct CliArgs {
    /// Scenario file (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide title bars of tabbed panels, overriding the config file
    #[arg(long)]
    pub no_title_bars: bool,
}
