//! Fund representation and raw input records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single raw input row describing one holding edge.
///
/// The value is kept as unparsed text: parsing and validation happen in
/// [`build_graph`](crate::build_graph) so that parse failures can be
/// reported with the record's input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingRecord {
    /// Name of the fund that holds the position.
    pub parent: String,

    /// Name of the fund being held.
    pub child: String,

    /// Absolute monetary value of the position, as text.
    pub value: String,
}

impl HoldingRecord {
    /// Creates a new record from its three fields.
    #[must_use]
    pub fn new(
        parent: impl Into<String>,
        child: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            value: value.into(),
        }
    }
}

/// A fund node in the holding graph.
///
/// Holdings map a child fund name to the absolute amount of that child
/// held by this fund. A fund with no holdings is a *base fund* (leaf).
///
/// Holdings are kept in a `BTreeMap` so iteration order, and therefore
/// output order, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    /// Child fund name -> absolute value held.
    pub holdings: BTreeMap<String, Decimal>,
}

impl Fund {
    /// Creates a fund with no holdings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this fund has no holdings (a traversal leaf).
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.holdings.is_empty()
    }

    /// The fund's underlying value: the sum of its direct holding values.
    ///
    /// One level only, not recursively expanded.
    #[must_use]
    pub fn underlying_value(&self) -> Decimal {
        self.holdings.values().sum()
    }
}
