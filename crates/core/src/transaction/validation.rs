//! Validation of raw transaction records.
//!
//! Malformed records are caught here, before classification, so that
//! they are reported instead of being silently misclassified.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tallybook_shared::BatchPolicy;
use tallybook_shared::types::TransactionId;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{RawAmount, RawTransaction, Transaction, TransactionType, normalize_category};
use crate::classify::Bucket;
use crate::reports::ReportError;

/// Why a raw record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Identifier is empty.
    #[error("Transaction id is empty")]
    EmptyId,

    /// Identifier was already used earlier in the snapshot.
    #[error("Duplicate transaction id")]
    DuplicateId,

    /// No type was given.
    #[error("Transaction type is missing")]
    MissingType,

    /// Type is not one the system knows.
    #[error("Unknown transaction type: {value}")]
    UnknownType {
        /// The offending value.
        value: String,
    },

    /// No date was given.
    #[error("Transaction date is missing")]
    MissingDate,

    /// Date could not be parsed.
    #[error("Unparseable transaction date: {value}")]
    InvalidDate {
        /// The offending value.
        value: String,
    },

    /// No amount was given.
    #[error("Transaction amount is missing")]
    MissingAmount,

    /// Amount is not a number.
    #[error("Unparseable transaction amount: {value}")]
    InvalidAmount {
        /// The offending value.
        value: String,
    },

    /// Amount is negative; direction must come from the type.
    #[error("Transaction amount cannot be negative: {amount}")]
    NegativeAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// Amount is larger than any single ledger entry may be.
    #[error("Transaction amount exceeds {max}: {amount}")]
    AmountOutOfRange {
        /// The offending amount.
        amount: Decimal,
        /// The largest accepted amount.
        max: Decimal,
    },

    /// Explicit bucket name is not a known bucket.
    #[error("Unknown bucket: {value}")]
    UnknownBucket {
        /// The offending value.
        value: String,
    },

    /// Explicit bucket belongs to a different transaction type.
    #[error("Bucket {bucket} cannot hold {transaction_type} transactions")]
    BucketTypeMismatch {
        /// The requested bucket.
        bucket: Bucket,
        /// The transaction's type.
        transaction_type: TransactionType,
    },
}

/// Largest accepted amount (10^15).
///
/// Statement lines are sums and differences of accepted amounts; keeping
/// each amount this far below `Decimal::MAX` keeps that arithmetic from
/// overflowing for any snapshot that fits in memory.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Identifier of the rejected record (possibly empty).
    pub id: TransactionId,
    /// Why it was rejected.
    pub reason: RejectionReason,
}

/// Outcome of validating one snapshot.
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    /// Records that passed validation, in input order.
    pub transactions: Vec<Transaction>,
    /// Records that failed validation, in input order.
    pub rejected: Vec<Rejection>,
    /// Records of an upstream type the engine does not consume.
    pub skipped: usize,
}

/// Counts reported alongside generated statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Number of accepted records.
    pub accepted: usize,
    /// Number of records of an unconsumed type.
    pub skipped: usize,
    /// Rejected records with reasons.
    pub rejected: Vec<Rejection>,
}

impl ValidatedBatch {
    /// Returns true if no record was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Summarizes the batch for the caller.
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            accepted: self.transactions.len(),
            skipped: self.skipped,
            rejected: self.rejected.clone(),
        }
    }
}

impl RawTransaction {
    /// Validates this record.
    ///
    /// Returns `Ok(None)` for records of a known type that the engine
    /// does not consume (transfers, reversals, other).
    pub fn validate(&self) -> Result<Option<Transaction>, RejectionReason> {
        let id = TransactionId::new(self.id.trim());
        if id.is_blank() {
            return Err(RejectionReason::EmptyId);
        }

        let type_name = self
            .transaction_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(RejectionReason::MissingType)?;
        if TransactionType::is_unconsumed(type_name) {
            return Ok(None);
        }
        let transaction_type =
            TransactionType::parse(type_name).ok_or_else(|| RejectionReason::UnknownType {
                value: type_name.to_string(),
            })?;

        let date = parse_date(self.date.as_deref())?;
        let amount = parse_amount(self.amount.as_ref())?;
        let bucket = parse_bucket(self.bucket.as_deref(), transaction_type)?;

        Ok(Some(Transaction {
            id,
            date,
            transaction_type,
            category: self.category.as_deref().and_then(normalize_category),
            amount,
            bucket,
        }))
    }
}

fn parse_date(value: Option<&str>) -> Result<NaiveDate, RejectionReason> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RejectionReason::MissingDate)?;

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| RejectionReason::InvalidDate {
            value: value.to_string(),
        })
}

fn parse_amount(value: Option<&RawAmount>) -> Result<Decimal, RejectionReason> {
    match value {
        None => Err(RejectionReason::MissingAmount),
        Some(RawAmount::Text(text)) => Err(RejectionReason::InvalidAmount {
            value: text.clone(),
        }),
        Some(RawAmount::Other(value)) => Err(RejectionReason::InvalidAmount {
            value: value.to_string(),
        }),
        Some(RawAmount::Number(amount)) if amount.is_sign_negative() && !amount.is_zero() => {
            Err(RejectionReason::NegativeAmount { amount: *amount })
        }
        Some(RawAmount::Number(amount)) if *amount > MAX_AMOUNT => {
            Err(RejectionReason::AmountOutOfRange {
                amount: *amount,
                max: MAX_AMOUNT,
            })
        }
        Some(RawAmount::Number(amount)) => Ok(amount.abs()),
    }
}

fn parse_bucket(
    value: Option<&str>,
    transaction_type: TransactionType,
) -> Result<Option<Bucket>, RejectionReason> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let bucket = Bucket::parse(value).ok_or_else(|| RejectionReason::UnknownBucket {
        value: value.to_string(),
    })?;
    if !bucket.accepts(transaction_type) {
        return Err(RejectionReason::BucketTypeMismatch {
            bucket,
            transaction_type,
        });
    }
    Ok(Some(bucket))
}

/// Validates a whole snapshot.
///
/// Every record is checked; invalid ones never abort validation of the
/// rest. Under [`BatchPolicy::Reject`] any rejection fails the batch.
pub fn validate_batch(
    raw: &[RawTransaction],
    policy: BatchPolicy,
) -> Result<ValidatedBatch, ReportError> {
    let mut batch = ValidatedBatch::default();
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());

    for record in raw {
        let id = record.id.trim();
        let outcome = if !id.is_empty() && !seen.insert(id.to_string()) {
            Err(RejectionReason::DuplicateId)
        } else {
            record.validate()
        };

        match outcome {
            Ok(Some(transaction)) => batch.transactions.push(transaction),
            Ok(None) => batch.skipped += 1,
            Err(reason) => {
                warn!(transaction_id = %id, %reason, "Rejected transaction");
                batch.rejected.push(Rejection {
                    id: TransactionId::new(id),
                    reason,
                });
            }
        }
    }

    debug!(
        accepted = batch.transactions.len(),
        skipped = batch.skipped,
        rejected = batch.rejected.len(),
        "Validated transaction snapshot"
    );

    if policy == BatchPolicy::Reject && !batch.is_clean() {
        return Err(ReportError::InvalidBatch {
            rejected: batch.rejected,
        });
    }

    Ok(batch)
}
