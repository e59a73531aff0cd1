//! Per-bucket and per-line running sums.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::classify::{Bucket, CashFlowLine};
use crate::transaction::{Transaction, TransactionType};

/// Running sums keyed by bucket, cash-flow line, and transaction type.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    buckets: BTreeMap<Bucket, Decimal>,
    lines: BTreeMap<CashFlowLine, Decimal>,
    types: BTreeMap<TransactionType, Decimal>,
}

impl Totals {
    /// Sums the given transactions.
    pub fn collect<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Self::default();
        for transaction in transactions {
            totals.add(transaction);
        }
        totals
    }

    /// Adds one transaction.
    pub fn add(&mut self, transaction: &Transaction) {
        let classification = transaction.classification();
        *self.buckets.entry(classification.bucket).or_default() += transaction.amount;
        if let Some(line) = classification.cash_flow {
            *self.lines.entry(line).or_default() += transaction.amount;
        }
        *self
            .types
            .entry(transaction.transaction_type)
            .or_default() += transaction.amount;
    }

    /// Sum for a bucket (zero if absent).
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> Decimal {
        self.buckets.get(&bucket).copied().unwrap_or_default()
    }

    /// Sum for a cash-flow line (zero if absent).
    #[must_use]
    pub fn line(&self, line: CashFlowLine) -> Decimal {
        self.lines.get(&line).copied().unwrap_or_default()
    }

    /// Sum over every transaction of a type (zero if absent).
    #[must_use]
    pub fn of_type(&self, transaction_type: TransactionType) -> Decimal {
        self.types.get(&transaction_type).copied().unwrap_or_default()
    }
}
