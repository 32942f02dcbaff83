//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{InspectArgs, WeightsArgs};

/// Fundlens - fund-of-funds look-through weight analytics CLI
#[derive(Parser)]
#[command(name = "fundlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate base fund weights (and returns, if present) per root fund
    Weights(WeightsArgs),

    /// Summarize a holdings file: funds, edges, roots, base funds
    Inspect(InspectArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format (root,base_fund,weight[,return] - no header)
    Csv,
    /// Minimal output (just the weight lines)
    Minimal,
}
