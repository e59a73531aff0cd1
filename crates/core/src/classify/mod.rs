//! Transaction classification.
//!
//! Maps a transaction's type and category onto the bucket it aggregates
//! into, and onto the cash-flow line it moves (if any). All matching goes
//! through the two ordered tables in [`rules`].

pub mod bucket;
pub mod rules;

#[cfg(test)]
mod tests;

pub use bucket::{Bucket, CashFlowLine, Classification};
pub use rules::{BUCKET_RULES, CASH_FLOW_RULES, Classifier, KeywordRule};
