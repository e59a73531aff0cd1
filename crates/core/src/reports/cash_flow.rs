//! Cash flow statement builder (indirect method, simplified).

use super::totals::Totals;
use super::types::{
    CashFlowStatement, FinancingActivities, IncomeStatement, InvestingActivities,
    OperatingActivities,
};
use crate::classify::CashFlowLine;
use crate::period::PeriodSelector;
use crate::transaction::Transaction;

/// Builds the cash flow statement for the income statement's period.
///
/// Net income is taken from `income` rather than recomputed, so the two
/// statements always agree. Every line holds a magnitude; its sign comes
/// from the subtotal formula it appears in.
#[must_use]
pub fn build(income: &IncomeStatement, transactions: &[Transaction]) -> CashFlowStatement {
    let totals = Totals::collect(PeriodSelector::within(income.period).select(transactions));

    let net_income = income.net_income;
    let depreciation = totals.line(CashFlowLine::Depreciation);
    let accounts_receivable = totals.line(CashFlowLine::AccountsReceivable);
    let inventory = totals.line(CashFlowLine::Inventory);
    let accounts_payable = totals.line(CashFlowLine::AccountsPayable);
    let operating_activities = OperatingActivities {
        net_income,
        depreciation,
        accounts_receivable,
        inventory,
        accounts_payable,
        net_operating_cash: net_income + depreciation - accounts_receivable - inventory
            + accounts_payable,
    };

    let equipment_purchases = totals.line(CashFlowLine::EquipmentPurchase);
    let asset_sales = totals.line(CashFlowLine::AssetSale);
    let investing_activities = InvestingActivities {
        equipment_purchases,
        asset_sales,
        net_investing_cash: asset_sales - equipment_purchases,
    };

    let loan_proceeds = totals.line(CashFlowLine::LoanProceeds);
    let loan_payments = totals.line(CashFlowLine::LoanPayment);
    let owner_withdrawals = totals.line(CashFlowLine::OwnerWithdrawal);
    let financing_activities = FinancingActivities {
        loan_proceeds,
        loan_payments,
        owner_withdrawals,
        net_financing_cash: loan_proceeds - loan_payments - owner_withdrawals,
    };

    let net_cash_flow = operating_activities.net_operating_cash
        + investing_activities.net_investing_cash
        + financing_activities.net_financing_cash;

    CashFlowStatement {
        period: income.period,
        currency: income.currency,
        operating_activities,
        investing_activities,
        financing_activities,
        net_cash_flow,
    }
}
