//! # Fundlens Core
//!
//! Holding graph construction and look-through weight calculation for
//! fund-of-funds structures.
//!
//! Input is a flat edge list of `(parent, child, value)` holdings. The
//! crate builds a validated directed graph from it, finds the root
//! funds (no incoming edge), and computes, per root, the normalized
//! fraction of the root's total underlying value attributable to each
//! reachable base fund (no outgoing edges) - aggregated over every
//! distinct path, so diamond-shaped structures are handled correctly.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Exact arithmetic**: `rust_decimal` throughout; rounding is a
//!   presentation concern left to callers
//! - **Fail fast**: Malformed input aborts the build with no partial
//!   graph; cycles abort the affected root's calculation
//! - **Bounded traversal**: Weight calculation uses an explicit work
//!   stack, so graph depth is limited by memory, not the call stack
//!
//! ## Quick Start
//!
//! ```rust
//! use fundlens_core::prelude::*;
//!
//! let records = vec![
//!     HoldingRecord::new("A", "B", "1000"),
//!     HoldingRecord::new("A", "C", "3000"),
//! ];
//!
//! let graph = build_graph(records, BuildOptions::default())?;
//! graph.check_structure()?;
//!
//! for root in graph.roots() {
//!     let result = calculate_weights(&graph, root)?;
//!     println!("{}: {}", result.fund, result.value);
//! }
//! # Ok::<(), fundlens_core::FundError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`graph`] - Fund records, graph construction, and validation
//! - [`weights`] - Look-through weight calculation
//! - [`error`] - Error taxonomy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod error;
pub mod graph;
pub mod weights;

// Re-export error types at crate root
pub use error::{FundError, FundResult};

// Re-export graph types
pub use graph::{build_graph, BuildOptions, Fund, FundGraph, HoldingRecord, ValueRule};

// Re-export weight calculation
pub use weights::{calculate_weights, FundWeights};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fundlens_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FundError, FundResult};
    pub use crate::graph::{build_graph, BuildOptions, Fund, FundGraph, HoldingRecord, ValueRule};
    pub use crate::weights::{calculate_weights, FundWeights};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
