//! CLI command implementations.

pub mod inspect;
pub mod weights;

// Re-export submodules for convenience
pub use inspect::InspectArgs;
pub use weights::WeightsArgs;

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use fundlens_core::{FundError, HoldingRecord};

use crate::error::{CliError, CliResult};

/// Parsed input file: holding records plus, for four-column files, the
/// derived returns records (`end_value - value` per edge).
#[derive(Debug, Clone)]
pub struct InputData {
    /// One record per input row, in input order.
    pub holdings: Vec<HoldingRecord>,

    /// Present when the file carried end-of-period market values.
    pub returns: Option<Vec<HoldingRecord>>,
}

/// Reads a delimited holdings file.
///
/// Rows are `parent,child,value` or `parent,child,value,end_value`;
/// the first row fixes the shape for the whole file. Whitespace around
/// fields is trimmed and no header row is expected.
pub fn read_input(path: &Path) -> CliResult<InputData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut expected: Option<usize> = None;
    let mut holdings = Vec::new();
    let mut returns = Vec::new();

    for (idx, row) in reader.records().enumerate() {
        let line = idx + 1;
        let row = row?;
        let found = row.len();

        if !(found == 3 || found == 4) {
            return Err(CliError::InvalidRowShape { line, found });
        }
        let shape = *expected.get_or_insert(found);
        if found != shape {
            return Err(CliError::MixedRowShape {
                line,
                expected: shape,
                found,
            });
        }

        let parent = &row[0];
        let child = &row[1];
        holdings.push(HoldingRecord::new(parent, child, &row[2]));

        if found == 4 {
            // Derive the period return for this edge. The start value is
            // validated again by the graph builder; parsing it here only
            // fronts the same error.
            let start = Decimal::from_str(&row[2])
                .map_err(|_| FundError::value_parse(line, &row[2]))?;
            let end = Decimal::from_str(&row[3]).map_err(|_| CliError::InvalidEndValue {
                line,
                text: row[3].to_string(),
            })?;
            returns.push(HoldingRecord::new(parent, child, (end - start).to_string()));
        }
    }

    let returns = if expected == Some(4) {
        Some(returns)
    } else {
        None
    };

    Ok(InputData { holdings, returns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_three_column_file() {
        let file = write_file("A,B,1000\nA, C, 2000\n");
        let input = read_input(file.path()).unwrap();
        assert_eq!(input.holdings.len(), 2);
        assert!(input.returns.is_none());
        // skipinitialspace behavior: surrounding whitespace is trimmed
        assert_eq!(input.holdings[1], HoldingRecord::new("A", "C", "2000"));
    }

    #[test]
    fn test_read_four_column_file_derives_returns() {
        let file = write_file("A,B,1000,1100\nA,C,2000,1900\n");
        let input = read_input(file.path()).unwrap();
        let returns = input.returns.unwrap();
        assert_eq!(returns[0], HoldingRecord::new("A", "B", "100"));
        assert_eq!(returns[1], HoldingRecord::new("A", "C", "-100"));
    }

    #[test]
    fn test_two_fields_rejected() {
        let file = write_file("A,B,100\nB,D\n");
        let err = read_input(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidRowShape { line: 2, found: 2 }
        ));
    }

    #[test]
    fn test_mixed_shapes_rejected() {
        let file = write_file("A,B,100\nA,C,200,220\n");
        let err = read_input(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::MixedRowShape {
                line: 2,
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn test_bad_end_value_rejected() {
        let file = write_file("A,B,100,abc\n");
        let err = read_input(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidEndValue { line: 1, .. }));
    }
}
