//! Report error types.

use chrono::NaiveDate;
use tallybook_shared::AppError;
use thiserror::Error;

use crate::transaction::Rejection;

/// Errors that can occur before statements are built.
///
/// The builders themselves never fail; these errors come from period
/// construction and snapshot validation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Period could not be constructed.
    #[error("Invalid reporting period: {0}")]
    InvalidPeriod(String),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Snapshot rejected under the reject-whole-batch policy.
    #[error("Transaction snapshot rejected: {} invalid record(s)", rejected.len())]
    InvalidBatch {
        /// Records that failed validation.
        rejected: Vec<Rejection>,
    },
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
