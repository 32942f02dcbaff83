//! Weight calculation over a built holding graph.

mod calculator;
mod report;

pub use calculator::calculate_weights;
pub use report::FundWeights;
