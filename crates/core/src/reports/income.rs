//! Income statement builder.

use tallybook_shared::types::Currency;

use super::totals::Totals;
use super::types::IncomeStatement;
use crate::classify::Bucket;
use crate::period::{PeriodSelector, ReportingPeriod};
use crate::transaction::Transaction;

/// Builds the income statement from transactions dated within `period`.
#[must_use]
pub fn build(
    transactions: &[Transaction],
    period: ReportingPeriod,
    currency: Currency,
) -> IncomeStatement {
    let totals = Totals::collect(PeriodSelector::within(period).select(transactions));
    from_totals(&totals, period, currency)
}

/// Derives every subtotal from the bucket sums.
fn from_totals(totals: &Totals, period: ReportingPeriod, currency: Currency) -> IncomeStatement {
    let revenue = totals.bucket(Bucket::Revenue);
    let cost_of_goods_sold = totals.bucket(Bucket::CostOfGoodsSold);
    let operating_expenses = totals.bucket(Bucket::OperatingExpenses);
    let interest_expense = totals.bucket(Bucket::InterestExpense);
    let income_tax = totals.bucket(Bucket::IncomeTax);

    let gross_profit = revenue - cost_of_goods_sold;
    let operating_income = gross_profit - operating_expenses;
    let net_income = operating_income - interest_expense - income_tax;

    IncomeStatement {
        period,
        currency,
        revenue,
        cost_of_goods_sold,
        gross_profit,
        operating_expenses,
        operating_income,
        interest_expense,
        income_tax,
        net_income,
    }
}
