//! Report data types.
//!
//! Reports are plain values: built fresh on every call and handed to the
//! caller. Field names serialize in camelCase.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tallybook_shared::types::Currency;

use crate::period::ReportingPeriod;

/// Income statement for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period covered.
    pub period: ReportingPeriod,
    /// Currency code.
    pub currency: Currency,
    /// Total revenue.
    pub revenue: Decimal,
    /// Cost of goods sold.
    pub cost_of_goods_sold: Decimal,
    /// Gross profit (revenue - COGS).
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Operating income (gross profit - operating expenses).
    pub operating_income: Decimal,
    /// Interest expense.
    pub interest_expense: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Net income (operating income - interest - tax).
    pub net_income: Decimal,
}

/// Asset side of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsSection {
    /// Current assets.
    pub current_assets: Decimal,
    /// Fixed assets.
    pub fixed_assets: Decimal,
    /// Current + fixed.
    pub total_assets: Decimal,
}

/// Liabilities section of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilitiesSection {
    /// Current liabilities.
    pub current_liabilities: Decimal,
    /// Long-term liabilities.
    pub long_term_liabilities: Decimal,
    /// Current + long-term.
    pub total_liabilities: Decimal,
}

/// Equity section of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquitySection {
    /// Owner's contributed equity.
    pub owner_equity: Decimal,
    /// Retained earnings, including net income to date.
    pub retained_earnings: Decimal,
    /// Owner + retained.
    pub total_equity: Decimal,
}

/// Balance sheet as of a cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Cutoff date (inclusive).
    pub as_of: NaiveDate,
    /// Currency code.
    pub currency: Currency,
    /// Assets section.
    pub assets: AssetsSection,
    /// Liabilities section.
    pub liabilities: LiabilitiesSection,
    /// Equity section.
    pub equity: EquitySection,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Total assets minus liabilities and equity.
    pub imbalance: Decimal,
    /// Whether assets equal liabilities plus equity. Reported, not enforced.
    pub is_balanced: bool,
}

/// Operating activities (indirect method).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingActivities {
    /// Net income from the income statement.
    pub net_income: Decimal,
    /// Depreciation added back.
    pub depreciation: Decimal,
    /// Receivables increase (subtracted).
    pub accounts_receivable: Decimal,
    /// Inventory increase (subtracted).
    pub inventory: Decimal,
    /// Payables increase (added).
    pub accounts_payable: Decimal,
    /// Net cash from operations.
    pub net_operating_cash: Decimal,
}

/// Investing activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestingActivities {
    /// Equipment purchases (outflow).
    pub equipment_purchases: Decimal,
    /// Asset sales (inflow).
    pub asset_sales: Decimal,
    /// Net cash from investing.
    pub net_investing_cash: Decimal,
}

/// Financing activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingActivities {
    /// Loan proceeds (inflow).
    pub loan_proceeds: Decimal,
    /// Loan repayments (outflow).
    pub loan_payments: Decimal,
    /// Owner withdrawals (outflow).
    pub owner_withdrawals: Decimal,
    /// Net cash from financing.
    pub net_financing_cash: Decimal,
}

/// Cash flow statement for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Period covered.
    pub period: ReportingPeriod,
    /// Currency code.
    pub currency: Currency,
    /// Operating section.
    pub operating_activities: OperatingActivities,
    /// Investing section.
    pub investing_activities: InvestingActivities,
    /// Financing section.
    pub financing_activities: FinancingActivities,
    /// Sum of the three section totals.
    pub net_cash_flow: Decimal,
}

/// All three statements built from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    /// Income statement for the period.
    pub income_statement: IncomeStatement,
    /// Balance sheet as of the period end.
    pub balance_sheet: BalanceSheet,
    /// Cash flow statement for the period.
    pub cash_flow_statement: CashFlowStatement,
}
