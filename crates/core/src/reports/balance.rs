//! Balance sheet builder.

use chrono::NaiveDate;
use tallybook_shared::types::Currency;

use super::totals::Totals;
use super::types::{AssetsSection, BalanceSheet, EquitySection, LiabilitiesSection};
use crate::classify::Bucket;
use crate::period::PeriodSelector;
use crate::transaction::{Transaction, TransactionType};

/// Builds the balance sheet from every transaction dated on or before
/// `as_of`.
///
/// Retained earnings fold in the net income of the whole window (all
/// revenue minus all expenses). There is no opening balance, so the
/// accounting identity holds only when the snapshot itself balances;
/// `is_balanced` and `imbalance` report it without adjusting anything.
#[must_use]
pub fn build(transactions: &[Transaction], as_of: NaiveDate, currency: Currency) -> BalanceSheet {
    let totals = Totals::collect(PeriodSelector::as_of(as_of).select(transactions));

    let current_assets = totals.bucket(Bucket::CurrentAssets);
    let fixed_assets = totals.bucket(Bucket::FixedAssets);
    let assets = AssetsSection {
        current_assets,
        fixed_assets,
        total_assets: current_assets + fixed_assets,
    };

    let current_liabilities = totals.bucket(Bucket::CurrentLiabilities);
    let long_term_liabilities = totals.bucket(Bucket::LongTermLiabilities);
    let liabilities = LiabilitiesSection {
        current_liabilities,
        long_term_liabilities,
        total_liabilities: current_liabilities + long_term_liabilities,
    };

    let owner_equity = totals.bucket(Bucket::OwnerEquity);
    let retained_earnings = totals.bucket(Bucket::RetainedEarnings)
        + totals.of_type(TransactionType::Revenue)
        - totals.of_type(TransactionType::Expense);
    let equity = EquitySection {
        owner_equity,
        retained_earnings,
        total_equity: owner_equity + retained_earnings,
    };

    let liabilities_and_equity = liabilities.total_liabilities + equity.total_equity;
    let imbalance = assets.total_assets - liabilities_and_equity;

    BalanceSheet {
        as_of,
        currency,
        assets,
        liabilities,
        equity,
        liabilities_and_equity,
        imbalance,
        is_balanced: imbalance.is_zero(),
    }
}
