//! Holding graph construction and input validation.
//!
//! [`build_graph`] turns an ordered sequence of raw records into a
//! validated [`FundGraph`]. All structural validation of raw input
//! happens here; cycle detection is deferred to traversal time.

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FundError, FundResult};
use crate::graph::{FundGraph, HoldingRecord};

/// Validation rule for holding values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueRule {
    /// Values must be strictly positive. The rule for holdings data.
    #[default]
    StrictlyPositive,

    /// Any finite decimal is accepted, including zero and negatives.
    ///
    /// Used for derived returns graphs, where an edge value is an
    /// end-of-period delta and a losing position is negative.
    AllowAny,
}

/// Configuration for graph construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BuildOptions {
    /// How holding values are validated.
    pub value_rule: ValueRule,
}

impl BuildOptions {
    /// Creates options with default (strict) validation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a derived returns graph.
    #[must_use]
    pub fn returns() -> Self {
        Self {
            value_rule: ValueRule::AllowAny,
        }
    }

    /// Sets the value rule.
    #[must_use]
    pub fn with_value_rule(mut self, rule: ValueRule) -> Self {
        self.value_rule = rule;
        self
    }
}

/// Builds a validated holding graph from an ordered sequence of records.
///
/// For each record, in input order (1-based positions in errors):
/// - rejects empty parent or child names,
/// - parses the value as an exact decimal,
/// - rejects non-positive values under [`ValueRule::StrictlyPositive`],
/// - rejects a repeated (parent, child) pair,
/// - implicitly creates the child as a leaf if it was not seen before.
///
/// The returned graph's root set is every fund that never appeared as a
/// child. The graph may contain cycles; those are detected lazily by
/// [`calculate_weights`](crate::calculate_weights).
///
/// # Errors
///
/// Any defect aborts the build immediately; no partial graph is returned.
pub fn build_graph<I>(records: I, options: BuildOptions) -> FundResult<FundGraph>
where
    I: IntoIterator<Item = HoldingRecord>,
{
    let mut graph = FundGraph::new();
    let mut has_parent = BTreeSet::new();

    for (idx, record) in records.into_iter().enumerate() {
        let line = idx + 1;

        if record.parent.is_empty() || record.child.is_empty() {
            return Err(FundError::malformed(line, "empty fund name"));
        }

        let value = Decimal::from_str(record.value.trim())
            .map_err(|_| FundError::value_parse(line, record.value.clone()))?;

        if options.value_rule == ValueRule::StrictlyPositive && value <= Decimal::ZERO {
            return Err(FundError::NonPositiveValue { line, value });
        }

        let parent = graph.funds.entry(record.parent.clone()).or_default();
        if parent.holdings.contains_key(&record.child) {
            return Err(FundError::duplicate(line, record.parent, record.child));
        }
        parent.holdings.insert(record.child.clone(), value);

        // Ensure the child exists, implicitly creating leaf funds.
        graph.funds.entry(record.child.clone()).or_default();
        has_parent.insert(record.child);
    }

    graph.roots = graph
        .funds
        .keys()
        .filter(|name| !has_parent.contains(*name))
        .cloned()
        .collect();

    debug!(
        funds = graph.funds.len(),
        roots = graph.roots.len(),
        "built holding graph"
    );

    Ok(graph)
}
