//! Weight calculation results.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a weight calculation for one fund.
///
/// `weights` maps each base fund reachable from `fund` to its share of
/// the fund's total underlying value, aggregated over every distinct
/// path. For a fund with at least one holding the shares sum to 1
/// exactly (all arithmetic is exact decimal). A base fund queried
/// directly yields value 0 and an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundWeights {
    /// The fund the calculation started from.
    pub fund: String,

    /// The fund's total underlying value (sum of its direct holdings).
    pub value: Decimal,

    /// Base fund name -> normalized weight in [0, 1].
    pub weights: BTreeMap<String, Decimal>,
}

impl FundWeights {
    /// Returns the sum of all base fund weights.
    #[must_use]
    pub fn weight_sum(&self) -> Decimal {
        self.weights.values().sum()
    }

    /// Returns true if the queried fund was itself a base fund.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.weights.is_empty()
    }
}
