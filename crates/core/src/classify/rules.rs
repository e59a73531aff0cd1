//! Priority-ordered keyword rule tables.
//!
//! Both tables are read top to bottom and the first matching rule wins.
//! A rule with no keywords matches any category of its type and closes
//! that type's section of the table. Matching is a substring test against
//! the lower-cased category.

use super::bucket::{Bucket, CashFlowLine, Classification};
use crate::transaction::{Transaction, TransactionType};
use TransactionType::{Asset, Equity, Expense, Liability, Revenue};

/// One row of a keyword rule table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    /// Transaction type the rule applies to.
    pub transaction_type: TransactionType,
    /// Substrings to look for; empty means "any category".
    pub keywords: &'static [&'static str],
    /// Outcome when the rule matches.
    pub outcome: T,
}

impl<T: Copy> KeywordRule<T> {
    const fn new(
        transaction_type: TransactionType,
        keywords: &'static [&'static str],
        outcome: T,
    ) -> Self {
        Self {
            transaction_type,
            keywords,
            outcome,
        }
    }

    /// Returns true if this rule matches the type and lower-cased category.
    #[must_use]
    pub fn matches(&self, transaction_type: TransactionType, category: &str) -> bool {
        self.transaction_type == transaction_type
            && (self.keywords.is_empty() || self.keywords.iter().any(|k| category.contains(k)))
    }
}

/// Statement bucket rules. "tax on inventory" is cost of goods sold
/// because the cost rule precedes the tax rule.
pub const BUCKET_RULES: &[KeywordRule<Bucket>] = &[
    KeywordRule::new(Revenue, &[], Bucket::Revenue),
    KeywordRule::new(
        Expense,
        &["cost", "goods", "inventory"],
        Bucket::CostOfGoodsSold,
    ),
    KeywordRule::new(Expense, &["interest"], Bucket::InterestExpense),
    KeywordRule::new(Expense, &["tax"], Bucket::IncomeTax),
    KeywordRule::new(Expense, &[], Bucket::OperatingExpenses),
    KeywordRule::new(
        Asset,
        &["cash", "bank", "receivable", "inventory", "prepaid"],
        Bucket::CurrentAssets,
    ),
    KeywordRule::new(Asset, &[], Bucket::FixedAssets),
    KeywordRule::new(
        Liability,
        &["payable", "short", "accrued"],
        Bucket::CurrentLiabilities,
    ),
    KeywordRule::new(Liability, &[], Bucket::LongTermLiabilities),
    KeywordRule::new(Equity, &["capital", "owner"], Bucket::OwnerEquity),
    KeywordRule::new(Equity, &[], Bucket::RetainedEarnings),
];

/// Cash-flow line rules. Sales precede equipment so that "equipment sale"
/// is an inflow, and repayments precede loans so that "loan repayment"
/// is an outflow.
pub const CASH_FLOW_RULES: &[KeywordRule<CashFlowLine>] = &[
    KeywordRule::new(
        Expense,
        &["depreciation", "amortization"],
        CashFlowLine::Depreciation,
    ),
    KeywordRule::new(Asset, &["receivable"], CashFlowLine::AccountsReceivable),
    KeywordRule::new(Asset, &["inventory"], CashFlowLine::Inventory),
    KeywordRule::new(Asset, &["sale", "sold", "disposal"], CashFlowLine::AssetSale),
    KeywordRule::new(
        Asset,
        &["equipment", "machinery", "vehicle", "furniture"],
        CashFlowLine::EquipmentPurchase,
    ),
    KeywordRule::new(Liability, &["payable"], CashFlowLine::AccountsPayable),
    KeywordRule::new(
        Liability,
        &["repayment", "loan payment", "principal"],
        CashFlowLine::LoanPayment,
    ),
    KeywordRule::new(
        Liability,
        &["loan", "borrow", "mortgage", "credit line"],
        CashFlowLine::LoanProceeds,
    ),
    KeywordRule::new(
        Equity,
        &["withdrawal", "drawing", "distribution", "dividend"],
        CashFlowLine::OwnerWithdrawal,
    ),
];

fn first_match<T: Copy>(
    rules: &[KeywordRule<T>],
    transaction_type: TransactionType,
    category: &str,
) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.matches(transaction_type, category))
        .map(|rule| rule.outcome)
}

/// Maps transactions onto buckets and cash-flow lines.
pub struct Classifier;

impl Classifier {
    /// Returns the statement bucket for a type and category.
    ///
    /// Never fails: every type has a fallback rule.
    #[must_use]
    pub fn classify(transaction_type: TransactionType, category: Option<&str>) -> Bucket {
        let category = category.map(str::to_lowercase).unwrap_or_default();
        Self::bucket_for(transaction_type, &category)
    }

    /// Returns the cash-flow line for a type and category, if any.
    #[must_use]
    pub fn cash_flow_line(
        transaction_type: TransactionType,
        category: Option<&str>,
    ) -> Option<CashFlowLine> {
        let category = category.map(str::to_lowercase).unwrap_or_default();
        first_match(CASH_FLOW_RULES, transaction_type, &category)
    }

    /// Classifies a validated transaction.
    ///
    /// An explicit bucket set at entry time takes precedence over the
    /// keyword table; the cash-flow line always comes from keywords.
    #[must_use]
    pub fn classify_transaction(transaction: &Transaction) -> Classification {
        let category = transaction.category_str().to_lowercase();
        let bucket = transaction
            .bucket
            .filter(|bucket| bucket.accepts(transaction.transaction_type))
            .unwrap_or_else(|| Self::bucket_for(transaction.transaction_type, &category));

        Classification {
            bucket,
            cash_flow: first_match(CASH_FLOW_RULES, transaction.transaction_type, &category),
        }
    }

    fn bucket_for(transaction_type: TransactionType, category: &str) -> Bucket {
        first_match(BUCKET_RULES, transaction_type, category).unwrap_or(match transaction_type {
            Revenue => Bucket::Revenue,
            Expense => Bucket::OperatingExpenses,
            Asset => Bucket::FixedAssets,
            Liability => Bucket::LongTermLiabilities,
            Equity => Bucket::RetainedEarnings,
        })
    }
}
