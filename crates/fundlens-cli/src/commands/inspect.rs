//! Inspect command implementation.
//!
//! Prints a structural summary of a holdings file without calculating
//! weights. Useful for checking roots and base funds before a run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fundlens_core::{build_graph, BuildOptions};

use crate::cli::OutputFormat;
use crate::commands::read_input;
use crate::output::{print_header, print_summary, KeyValue};

/// Arguments for the inspect command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// A delimited file with one holding per row: parent,child,value[,end_value]
    #[arg(value_name = "FILE")]
    pub data_file: PathBuf,
}

/// Execute the inspect command.
pub fn execute(args: InspectArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(&args.data_file)?;
    let has_returns = input.returns.is_some();

    let graph = build_graph(input.holdings, BuildOptions::default())?;

    let roots: Vec<&str> = graph.roots().collect();
    let bases: Vec<&str> = graph.base_funds().collect();

    let rows = vec![
        KeyValue::new("Funds", graph.len().to_string()),
        KeyValue::new("Holding edges", graph.edge_count().to_string()),
        KeyValue::new(
            "Roots",
            if roots.is_empty() {
                "(none)".to_string()
            } else {
                roots.join(", ")
            },
        ),
        KeyValue::new("Base funds", bases.join(", ")),
        KeyValue::new("Returns data", if has_returns { "yes" } else { "no" }),
    ];

    if format == OutputFormat::Table {
        print_header("Holdings Summary");
    }
    print_summary(&rows, format)?;

    Ok(())
}
