//! Error types for fund graph construction and weight calculation.
//!
//! This module defines the error types used throughout the core crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for fund graph operations.
pub type FundResult<T> = Result<T, FundError>;

/// Errors that can occur while building a holding graph or calculating weights.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FundError {
    /// A raw record is structurally invalid (wrong shape, empty name).
    #[error("Incorrect data format at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based position of the record in the input.
        line: usize,
        /// The reason the record is invalid.
        reason: String,
    },

    /// A value field could not be parsed as a decimal number.
    #[error("Invalid holding value at line {line}: '{text}' is not a decimal number")]
    ValueParse {
        /// 1-based position of the record in the input.
        line: usize,
        /// The unparsable value text.
        text: String,
    },

    /// A holding value was zero or negative where a positive value is required.
    #[error("Non-positive holding value at line {line}: {value}")]
    NonPositiveValue {
        /// 1-based position of the record in the input.
        line: usize,
        /// The offending value.
        value: Decimal,
    },

    /// The same (parent, child) edge appeared more than once.
    #[error("Duplicate fund entry at line {line}: {parent} -> {child}")]
    DuplicateHolding {
        /// 1-based position of the repeated record.
        line: usize,
        /// The parent fund name.
        parent: String,
        /// The child fund name.
        child: String,
    },

    /// A fund was revisited on its own active traversal path.
    #[error("Data is looped. Fund {fund} is both parent and child.")]
    CycleDetected {
        /// The fund at which the cycle closes.
        fund: String,
    },

    /// Every fund has a parent, which means the data is fully cyclic.
    #[error("Data is looped, expected Tree or Forest")]
    NoRootFunds,

    /// The graph contains no funds at all.
    #[error("No funds to act on")]
    EmptyGraph,

    /// The queried fund does not exist in the graph.
    #[error("Unknown fund: {name}")]
    UnknownFund {
        /// The name that was not found.
        name: String,
    },

    /// A non-base fund's holdings sum to zero, so weights cannot be normalized.
    #[error("Holdings of fund {name} sum to zero, cannot normalize weights")]
    ZeroValueFund {
        /// The fund whose underlying value is zero.
        name: String,
    },
}

impl FundError {
    /// Create a malformed record error.
    #[must_use]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a value parse error.
    #[must_use]
    pub fn value_parse(line: usize, text: impl Into<String>) -> Self {
        Self::ValueParse {
            line,
            text: text.into(),
        }
    }

    /// Create a duplicate holding error.
    #[must_use]
    pub fn duplicate(line: usize, parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::DuplicateHolding {
            line,
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Create a cycle detected error.
    #[must_use]
    pub fn cycle(fund: impl Into<String>) -> Self {
        Self::CycleDetected { fund: fund.into() }
    }

    /// Create an unknown fund error.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownFund { name: name.into() }
    }

    /// Returns true if this error was detected at build time.
    ///
    /// Build-time errors abort the whole build; calculation-time errors
    /// abort only the root being processed.
    #[must_use]
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::ValueParse { .. }
                | Self::NonPositiveValue { .. }
                | Self::DuplicateHolding { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = FundError::malformed(3, "expected 3 fields");
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("expected 3 fields"));

        let err = FundError::value_parse(7, "abc");
        assert!(err.to_string().contains("'abc'"));

        let err = FundError::duplicate(5, "A", "B");
        assert!(err.to_string().contains("Duplicate fund entry at line 5"));

        let err = FundError::cycle("D");
        assert!(err.to_string().contains("Fund D is both parent and child"));
    }

    #[test]
    fn test_non_positive_display() {
        let err = FundError::NonPositiveValue {
            line: 2,
            value: dec!(-10.5),
        };
        assert!(err.to_string().contains("-10.5"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_build_error_classification() {
        assert!(FundError::malformed(1, "x").is_build_error());
        assert!(FundError::value_parse(1, "x").is_build_error());
        assert!(FundError::duplicate(1, "A", "B").is_build_error());
        assert!(!FundError::cycle("A").is_build_error());
        assert!(!FundError::NoRootFunds.is_build_error());
        assert!(!FundError::EmptyGraph.is_build_error());
    }

    #[test]
    fn test_error_clone() {
        let err = FundError::EmptyGraph;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
