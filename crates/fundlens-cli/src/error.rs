//! CLI error types.

use fundlens_core::FundError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// A row does not have the expected number of fields.
    #[error("Incorrect data format at line {line}: expected 3 or 4 fields, found {found}")]
    InvalidRowShape {
        /// 1-based row position in the input file.
        line: usize,
        /// Number of fields found.
        found: usize,
    },

    /// Rows mix 3-field and 4-field shapes within one file.
    #[error("Incorrect data format at line {line}: expected {expected} fields like the first row, found {found}")]
    MixedRowShape {
        /// 1-based row position in the input file.
        line: usize,
        /// Field count of the first row.
        expected: usize,
        /// Number of fields found.
        found: usize,
    },

    /// An end-of-period value could not be parsed as a decimal.
    #[error("Invalid end value at line {line}: '{text}' is not a decimal number")]
    InvalidEndValue {
        /// 1-based row position in the input file.
        line: usize,
        /// The unparsable value text.
        text: String,
    },

    /// A core graph or calculation defect.
    #[error(transparent)]
    Data(#[from] FundError),

    /// CSV reading error.
    #[error("Cannot read input: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
