//! Ledger transactions: wire records, validated records, and the
//! validation step between them.

pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use types::{RawAmount, RawTransaction, Transaction, TransactionType, normalize_category};
pub use validation::{
    MAX_AMOUNT, Rejection, RejectionReason, ValidatedBatch, ValidationSummary, validate_batch,
};
