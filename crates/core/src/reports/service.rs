//! Report generation service.

use chrono::NaiveDate;
use tallybook_shared::ReportingConfig;
use tallybook_shared::types::Currency;
use tracing::debug;

use super::types::{BalanceSheet, CashFlowStatement, FinancialStatements, IncomeStatement};
use super::{balance, cash_flow, income};
use crate::period::ReportingPeriod;
use crate::transaction::Transaction;

/// Service for generating financial statements.
///
/// Holds only the reporting currency. Every call takes its transaction
/// snapshot and period explicitly and returns a freshly built report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportService {
    currency: Currency,
}

impl ReportService {
    /// Creates a service stamping reports with `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Creates a service from the reporting configuration.
    #[must_use]
    pub const fn from_config(config: &ReportingConfig) -> Self {
        Self::new(config.currency)
    }

    /// Reporting currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Builds the income statement for transactions dated within `period`.
    #[must_use]
    pub fn build_income_statement(
        &self,
        transactions: &[Transaction],
        period: ReportingPeriod,
    ) -> IncomeStatement {
        let statement = income::build(transactions, period, self.currency);
        debug!(%period, net_income = %statement.net_income, "Built income statement");
        statement
    }

    /// Builds the balance sheet from transactions dated on or before `cutoff`.
    #[must_use]
    pub fn build_balance_sheet(
        &self,
        transactions: &[Transaction],
        cutoff: NaiveDate,
    ) -> BalanceSheet {
        let sheet = balance::build(transactions, cutoff, self.currency);
        debug!(
            as_of = %cutoff,
            total_assets = %sheet.assets.total_assets,
            imbalance = %sheet.imbalance,
            "Built balance sheet"
        );
        sheet
    }

    /// Builds the cash flow statement for transactions dated within `period`.
    ///
    /// The income statement for the same period is built first and its net
    /// income feeds the operating section.
    #[must_use]
    pub fn build_cash_flow_statement(
        &self,
        transactions: &[Transaction],
        period: ReportingPeriod,
    ) -> CashFlowStatement {
        let income = self.build_income_statement(transactions, period);
        Self::build_cash_flow_for_income(&income, transactions)
    }

    /// Builds all three statements from one snapshot.
    ///
    /// The balance sheet is cut off at the period end. It is built in
    /// parallel with the income statement and the cash flow statement
    /// that depends on it.
    #[must_use]
    pub fn build_statements(
        &self,
        transactions: &[Transaction],
        period: ReportingPeriod,
    ) -> FinancialStatements {
        let ((income_statement, cash_flow_statement), balance_sheet) = rayon::join(
            || {
                let income = self.build_income_statement(transactions, period);
                let cash_flow = Self::build_cash_flow_for_income(&income, transactions);
                (income, cash_flow)
            },
            || self.build_balance_sheet(transactions, period.end),
        );

        FinancialStatements {
            income_statement,
            balance_sheet,
            cash_flow_statement,
        }
    }

    /// Builds the cash flow statement for an income statement already in
    /// hand, covering the same period and currency.
    #[must_use]
    pub fn build_cash_flow_for_income(
        income: &IncomeStatement,
        transactions: &[Transaction],
    ) -> CashFlowStatement {
        let statement = cash_flow::build(income, transactions);
        debug!(
            period = %income.period,
            net_cash_flow = %statement.net_cash_flow,
            "Built cash flow statement"
        );
        statement
    }
}
