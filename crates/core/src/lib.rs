//! Statement derivation engine for Tallybook.
//!
//! This crate turns a flat snapshot of ledger transactions into an
//! Income Statement, a Balance Sheet, and a Cash Flow Statement. It has
//! ZERO web or database dependencies and performs no I/O.
//!
//! # Modules
//!
//! - `transaction` - Wire records, validated transactions, snapshot validation
//! - `classify` - Ordered keyword rules mapping transactions to buckets
//! - `period` - Reporting periods and flow / point-in-time selection
//! - `reports` - The three statement builders and the report service

pub mod classify;
pub mod period;
pub mod reports;
pub mod transaction;

pub use classify::{Bucket, CashFlowLine, Classification, Classifier};
pub use period::{PeriodSelector, ReportingPeriod};
pub use reports::{
    BalanceSheet, CashFlowStatement, FinancialStatements, IncomeStatement, ReportError,
    ReportService,
};
pub use transaction::{
    RawTransaction, Rejection, RejectionReason, Transaction, TransactionType, ValidatedBatch,
    ValidationSummary, validate_batch,
};
