//! Look-through weight calculation.
//!
//! Computes, for a starting fund, its total underlying value and the
//! normalized weight of every reachable base fund. Weights are
//! normalized level by level: a child held at value `v` inside a fund
//! worth `total` contributes `v / total` of itself, and scales every
//! base weight it reports by the same factor. When a base fund is
//! reachable through several paths (a diamond), the per-path
//! contributions are summed.
//!
//! The traversal is an explicit-stack post-order walk rather than call
//! recursion, so arbitrarily deep graphs cannot exhaust the host call
//! stack. Path membership for cycle detection is scoped to the active
//! root-to-node path and every invocation starts with fresh state.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{FundError, FundResult};
use crate::graph::FundGraph;
use crate::weights::FundWeights;

/// One computed node: its underlying value and normalized base weights.
struct NodeResult {
    value: Decimal,
    weights: BTreeMap<String, Decimal>,
}

/// Post-order traversal frame.
enum Frame<'a> {
    /// First visit: expand children or resolve as a base fund.
    Enter(&'a str),
    /// All children resolved: aggregate their weights.
    Aggregate(&'a str),
}

/// Calculates base fund weights for `fund_name` over `graph`.
///
/// A base fund queried directly returns value 0 and an empty weight
/// map; its weight is always assigned by its holder.
///
/// # Errors
///
/// - [`FundError::UnknownFund`] if `fund_name` is not in the graph.
/// - [`FundError::CycleDetected`] if a fund is revisited on its own
///   active traversal path. This aborts the whole calculation for this
///   starting fund; other roots of the same graph are unaffected.
/// - [`FundError::ZeroValueFund`] if a non-base fund's holdings sum to
///   zero. Unreachable for graphs built with strictly positive values.
pub fn calculate_weights(graph: &FundGraph, fund_name: &str) -> FundResult<FundWeights> {
    let (start, _) = graph
        .funds
        .get_key_value(fund_name)
        .ok_or_else(|| FundError::unknown(fund_name))?;

    let mut resolved: HashMap<&str, NodeResult> = HashMap::new();
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame> = vec![Frame::Enter(start.as_str())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(name) => {
                if resolved.contains_key(name) {
                    continue;
                }
                if on_path.contains(name) {
                    return Err(FundError::cycle(name));
                }

                let fund = graph
                    .fund(name)
                    .ok_or_else(|| FundError::unknown(name))?;

                if fund.is_base() {
                    debug!(fund = name, "base fund");
                    resolved.insert(
                        name,
                        NodeResult {
                            value: Decimal::ZERO,
                            weights: BTreeMap::new(),
                        },
                    );
                    continue;
                }

                on_path.insert(name);
                stack.push(Frame::Aggregate(name));
                for child in fund.holdings.keys() {
                    stack.push(Frame::Enter(child));
                }
            }
            Frame::Aggregate(name) => {
                on_path.remove(name);

                let fund = graph
                    .fund(name)
                    .ok_or_else(|| FundError::unknown(name))?;
                let fund_value = fund.underlying_value();
                debug!(fund = name, value = %fund_value, "aggregating");

                if fund_value == Decimal::ZERO {
                    return Err(FundError::ZeroValueFund {
                        name: name.to_string(),
                    });
                }

                let mut weights: BTreeMap<String, Decimal> = BTreeMap::new();
                for (child, held) in &fund.holdings {
                    let share = held / fund_value;
                    let child_result = resolved
                        .get(child.as_str())
                        .ok_or_else(|| FundError::unknown(child))?;

                    if child_result.weights.is_empty() {
                        // The child is itself a base fund.
                        *weights.entry(child.clone()).or_insert(Decimal::ZERO) += share;
                    } else {
                        for (base, base_weight) in &child_result.weights {
                            *weights.entry(base.clone()).or_insert(Decimal::ZERO) +=
                                base_weight * share;
                        }
                    }
                }

                resolved.insert(
                    name,
                    NodeResult {
                        value: fund_value,
                        weights,
                    },
                );
            }
        }
    }

    let result = resolved
        .remove(start.as_str())
        .ok_or_else(|| FundError::unknown(start))?;

    Ok(FundWeights {
        fund: start.clone(),
        value: result.value,
        weights: result.weights,
    })
}
