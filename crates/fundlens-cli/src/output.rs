//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// One output row: a base fund's weight within a root fund.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct WeightRow {
    /// The root fund the weight is relative to.
    #[tabled(rename = "Root")]
    pub root: String,

    /// The base fund.
    #[tabled(rename = "Base Fund")]
    pub base_fund: String,

    /// Weight of the base fund, rounded to 3 decimal places.
    #[tabled(rename = "Weight")]
    pub weight: String,

    /// Weighted return, empty unless a returns column was supplied.
    #[tabled(rename = "Return")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub weighted_return: String,
}

impl WeightRow {
    /// Creates a weight row, applying display rounding.
    #[must_use]
    pub fn new(
        root: &str,
        base_fund: &str,
        weight: Decimal,
        weighted_return: Option<Decimal>,
    ) -> Self {
        Self {
            root: root.to_string(),
            base_fund: base_fund.to_string(),
            weight: format_weight(weight),
            weighted_return: weighted_return.map(format_weight).unwrap_or_default(),
        }
    }
}

/// Formats a weight to 3 decimal places, matching the reference output.
#[must_use]
pub fn format_weight(value: Decimal) -> String {
    format!("{:.3}", value)
}

/// Formats and prints weight rows based on the specified format.
pub fn print_weight_rows(rows: &[WeightRow], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv | OutputFormat::Minimal => print_csv(rows),
    }
}

/// Prints rows as a formatted table.
fn print_table<T: Tabled>(rows: &[T]) -> anyhow::Result<()> {
    if rows.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints rows as JSON.
fn print_json<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// Prints weight rows as headerless CSV: `root,base_fund,weight[,return]`.
fn print_csv(rows: &[WeightRow]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(std::io::stdout());
    for row in rows {
        if row.weighted_return.is_empty() {
            wtr.write_record([&row.root, &row.base_fund, &row.weight])?;
        } else {
            wtr.write_record([&row.root, &row.base_fund, &row.weight, &row.weighted_return])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a key-value summary based on the specified format.
pub fn print_summary(rows: &[KeyValue], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => {
            let output: std::collections::BTreeMap<String, String> = rows
                .iter()
                .map(|r| (r.key.clone(), r.value.clone()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(std::io::stdout());
            for row in rows {
                wtr.write_record([&row.key, &row.value])?;
            }
            wtr.flush()?;
            Ok(())
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
