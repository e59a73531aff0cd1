//! Accounting buckets and cash-flow lines.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionType;

/// Statement bucket a transaction aggregates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    /// Sales and other income.
    Revenue,
    /// Direct cost of goods sold.
    CostOfGoodsSold,
    /// Operating expenses (the expense fallback).
    OperatingExpenses,
    /// Interest paid on debt.
    InterestExpense,
    /// Income tax.
    IncomeTax,
    /// Cash, bank, receivables, inventory, prepaid items.
    CurrentAssets,
    /// Long-lived assets (the asset fallback).
    FixedAssets,
    /// Payables, short-term and accrued liabilities.
    CurrentLiabilities,
    /// Long-term debt (the liability fallback).
    LongTermLiabilities,
    /// Capital contributed by the owner.
    OwnerEquity,
    /// Retained earnings (the equity fallback).
    RetainedEarnings,
}

impl Bucket {
    /// Every bucket, in statement order.
    pub const ALL: [Self; 11] = [
        Self::Revenue,
        Self::CostOfGoodsSold,
        Self::OperatingExpenses,
        Self::InterestExpense,
        Self::IncomeTax,
        Self::CurrentAssets,
        Self::FixedAssets,
        Self::CurrentLiabilities,
        Self::LongTermLiabilities,
        Self::OwnerEquity,
        Self::RetainedEarnings,
    ];

    /// The only transaction type that may aggregate into this bucket.
    #[must_use]
    pub const fn transaction_type(self) -> TransactionType {
        match self {
            Self::Revenue => TransactionType::Revenue,
            Self::CostOfGoodsSold
            | Self::OperatingExpenses
            | Self::InterestExpense
            | Self::IncomeTax => TransactionType::Expense,
            Self::CurrentAssets | Self::FixedAssets => TransactionType::Asset,
            Self::CurrentLiabilities | Self::LongTermLiabilities => TransactionType::Liability,
            Self::OwnerEquity | Self::RetainedEarnings => TransactionType::Equity,
        }
    }

    /// Returns true if a transaction of the given type may use this bucket.
    #[must_use]
    pub fn accepts(self, transaction_type: TransactionType) -> bool {
        self.transaction_type() == transaction_type
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::CostOfGoodsSold => "costOfGoodsSold",
            Self::OperatingExpenses => "operatingExpenses",
            Self::InterestExpense => "interestExpense",
            Self::IncomeTax => "incomeTax",
            Self::CurrentAssets => "currentAssets",
            Self::FixedAssets => "fixedAssets",
            Self::CurrentLiabilities => "currentLiabilities",
            Self::LongTermLiabilities => "longTermLiabilities",
            Self::OwnerEquity => "ownerEquity",
            Self::RetainedEarnings => "retainedEarnings",
        }
    }

    /// Parses a bucket name in camelCase or snake_case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let folded: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().to_lowercase() == folded)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cash-flow statement line a transaction feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CashFlowLine {
    /// Non-cash expense added back to net income.
    Depreciation,
    /// Increase in receivables (consumes cash).
    AccountsReceivable,
    /// Increase in inventory (consumes cash).
    Inventory,
    /// Increase in payables (releases cash).
    AccountsPayable,
    /// Purchase of equipment or machinery.
    EquipmentPurchase,
    /// Proceeds from selling an asset.
    AssetSale,
    /// Cash received from borrowing.
    LoanProceeds,
    /// Principal repaid on a loan.
    LoanPayment,
    /// Cash taken out by the owner.
    OwnerWithdrawal,
}

/// Result of classifying one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Statement bucket.
    pub bucket: Bucket,
    /// Cash-flow line, if the transaction moves one.
    pub cash_flow: Option<CashFlowLine>,
}
