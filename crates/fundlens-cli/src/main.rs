//! Fundlens CLI - fund-of-funds look-through weight analytics.
//!
//! # Usage
//!
//! ```bash
//! # Calculate base fund weights per root fund
//! fundlens weights holdings.csv
//!
//! # Same, as raw CSV lines (root,base_fund,weight)
//! fundlens --format csv weights holdings.csv
//!
//! # With a fourth end-of-period value column, weighted returns too
//! fundlens weights holdings_with_end_values.csv
//!
//! # Summarize a file's structure
//! fundlens inspect holdings.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Weights(args) => commands::weights::execute(args, cli.format, cli.quiet)?,
        Commands::Inspect(args) => commands::inspect::execute(args, cli.format)?,
    }

    Ok(())
}

/// Initializes logging to stderr; RUST_LOG overrides the -v flags.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
