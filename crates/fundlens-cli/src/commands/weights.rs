//! Weights command implementation.
//!
//! Builds the holding graph from a delimited file and reports, per root
//! fund, the normalized weight of every reachable base fund. When the
//! file carries end-of-period values, a parallel returns graph is built
//! from the per-edge deltas and weighted returns are reported alongside.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use fundlens_core::{build_graph, calculate_weights, BuildOptions, FundGraph};

use crate::cli::OutputFormat;
use crate::commands::read_input;
use crate::error::CliResult;
use crate::output::{print_error, print_header, print_warning, print_weight_rows, WeightRow};

/// Arguments for the weights command.
#[derive(Args, Debug)]
pub struct WeightsArgs {
    /// A delimited file with one holding per row: parent,child,value[,end_value]
    #[arg(value_name = "FILE")]
    pub data_file: PathBuf,

    /// Keep processing remaining roots when one root's calculation fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Execute the weights command.
pub fn execute(args: WeightsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let input = read_input(&args.data_file)?;

    let graph = build_graph(input.holdings, BuildOptions::default())?;
    graph.check_structure()?;

    let returns_graph = input
        .returns
        .map(|records| build_graph(records, BuildOptions::returns()))
        .transpose()?;

    // It is not settled whether multiple roots are intended or a data
    // anomaly, so they are reported and each is processed on its own.
    if graph.roots.len() > 1 && !quiet {
        print_warning("Multiple roots found");
    }

    let mut rows = Vec::new();
    let mut failed_roots = 0usize;

    for root in graph.roots() {
        match calculate_root(&graph, returns_graph.as_ref(), root) {
            Ok(mut root_rows) => rows.append(&mut root_rows),
            Err(err) if args.continue_on_error => {
                print_error(&format!("{root}: {err}"));
                failed_roots += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if format == OutputFormat::Table && !quiet {
        print_header("Base Fund Weights");
    }
    print_weight_rows(&rows, format)?;

    if failed_roots > 0 {
        anyhow::bail!("{failed_roots} root(s) could not be calculated");
    }
    Ok(())
}

/// Calculates one root's weight rows, with weighted returns if available.
fn calculate_root(
    graph: &FundGraph,
    returns_graph: Option<&FundGraph>,
    root: &str,
) -> CliResult<Vec<WeightRow>> {
    let result = calculate_weights(graph, root)?;
    info!(root, value = %result.value, "calculated weights");

    let returns = returns_graph
        .map(|g| calculate_weights(g, root))
        .transpose()?;

    let rows = result
        .weights
        .iter()
        .map(|(base, weight)| {
            let weighted_return = returns
                .as_ref()
                .map(|r| r.weights.get(base).copied().unwrap_or(Decimal::ZERO));
            WeightRow::new(root, base, *weight, weighted_return)
        })
        .collect();

    Ok(rows)
}
