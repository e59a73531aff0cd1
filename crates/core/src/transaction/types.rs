//! Transaction domain types.
//!
//! `RawTransaction` is the loosely typed record handed over by the
//! transaction source. `Transaction` is the validated form the builders
//! consume: every field is present and well formed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tallybook_shared::types::TransactionId;

use crate::classify::{Bucket, Classification, Classifier};

/// Transaction type consumed by the statement engine.
///
/// The type alone decides the direction of an amount; amounts are
/// always stored as magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income earned.
    Revenue,
    /// Cost incurred.
    Expense,
    /// Resource owned.
    Asset,
    /// Amount owed.
    Liability,
    /// Owner's stake.
    Equity,
}

impl TransactionType {
    /// Wire names of types that exist upstream but carry no statement meaning.
    pub const UNCONSUMED: [&'static str; 3] = ["transfer", "reversal", "other"];

    /// Parses a wire type name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "revenue" => Some(Self::Revenue),
            "expense" => Some(Self::Expense),
            "asset" => Some(Self::Asset),
            "liability" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            _ => None,
        }
    }

    /// Returns true if the wire name is a known type the engine ignores.
    #[must_use]
    pub fn is_unconsumed(value: &str) -> bool {
        let value = value.trim().to_lowercase();
        Self::UNCONSUMED.contains(&value.as_str())
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated ledger transaction.
///
/// Only built by [`Transaction::new`] or by validation; there is no
/// deserializer, so unchecked records cannot bypass the magnitude and
/// category rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Economic date of the transaction.
    pub date: NaiveDate,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Lower-cased, trimmed category label.
    pub category: Option<String>,
    /// Non-negative magnitude.
    pub amount: Decimal,
    /// Bucket chosen explicitly when the record was entered.
    pub bucket: Option<Bucket>,
}

impl Transaction {
    /// Creates a transaction without an explicit bucket.
    ///
    /// The category is normalized the same way validation normalizes it.
    #[must_use]
    pub fn new(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        transaction_type: TransactionType,
        category: Option<&str>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            transaction_type,
            category: category.and_then(normalize_category),
            amount,
            bucket: None,
        }
    }

    /// Sets an explicit bucket.
    #[must_use]
    pub fn with_bucket(mut self, bucket: Bucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    /// Category as matched by the classifier (empty when absent).
    #[must_use]
    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Classifies this transaction.
    #[must_use]
    pub fn classification(&self) -> Classification {
        Classifier::classify_transaction(self)
    }
}

/// A transaction record as supplied by the transaction source.
///
/// Every field is optional and accepts any JSON value, so that a
/// malformed record is reported by validation instead of failing
/// deserialization of the whole snapshot. Non-string scalars in text
/// fields are kept as their JSON text (`20260301`, `true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Identifier.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    /// Date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    /// Type name.
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub transaction_type: Option<String>,
    /// Free-text category.
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    /// Amount as a JSON number or numeric string.
    #[serde(default)]
    pub amount: Option<RawAmount>,
    /// Explicit bucket name.
    #[serde(default, deserialize_with = "lenient_text")]
    pub bucket: Option<String>,
}

/// Amount as found on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A number, or a string that parses as one.
    Number(Decimal),
    /// A string that is not a number.
    Text(String),
    /// Any other JSON value, including numbers outside the decimal range.
    Other(serde_json::Value),
}

/// Reads any JSON value as optional text; `null` is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// Lower-cases and trims a category; blank categories become `None`.
#[must_use]
pub fn normalize_category(category: &str) -> Option<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
