//! The holding graph: funds, raw records, and graph construction.

mod builder;
mod fund;

pub use builder::{build_graph, BuildOptions, ValueRule};
pub use fund::{Fund, HoldingRecord};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{FundError, FundResult};

/// A validated, immutable holding graph.
///
/// Maps every fund name to its [`Fund`] record and carries the root set
/// (funds with no incoming edge). Built once per input, never mutated
/// afterwards. The graph may still contain cycles; those surface as
/// [`FundError::CycleDetected`] during weight calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundGraph {
    /// Fund name -> fund record.
    pub funds: BTreeMap<String, Fund>,

    /// Funds with no incoming holding edge.
    pub roots: BTreeSet<String>,
}

impl FundGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a fund by name.
    #[must_use]
    pub fn fund(&self, name: &str) -> Option<&Fund> {
        self.funds.get(name)
    }

    /// Iterates over the root fund names.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    /// Iterates over the base fund names (funds with no holdings).
    pub fn base_funds(&self) -> impl Iterator<Item = &str> {
        self.funds
            .iter()
            .filter(|(_, fund)| fund.is_base())
            .map(|(name, _)| name.as_str())
    }

    /// Total number of holding edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.funds.values().map(|f| f.holdings.len()).sum()
    }

    /// Number of funds in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// Returns true if the graph contains no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// Validates the graph's structure after a successful build.
    ///
    /// # Errors
    ///
    /// Returns [`FundError::EmptyGraph`] if there are no funds, and
    /// [`FundError::NoRootFunds`] if every fund has a parent (only
    /// possible when the data is fully cyclic or otherwise malformed).
    pub fn check_structure(&self) -> FundResult<()> {
        if self.funds.is_empty() {
            return Err(FundError::EmptyGraph);
        }
        if self.roots.is_empty() {
            return Err(FundError::NoRootFunds);
        }
        Ok(())
    }
}
