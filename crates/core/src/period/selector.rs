//! Reporting period types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::reports::ReportError;
use crate::transaction::Transaction;

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// A custom range.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] if `start` is after `end`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] if the month is not 1-12 or
    /// the year is out of range.
    pub fn month(year: i32, month: u32) -> Result<Self, ReportError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ReportError::InvalidPeriod(format!("{year}-{month:02}")))?;
        let end = last_day_of_month(start)
            .ok_or_else(|| ReportError::InvalidPeriod(format!("{year}-{month:02}")))?;
        Ok(Self { start, end })
    }

    /// A calendar quarter (1-4).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] if the quarter is not 1-4.
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, ReportError> {
        if !(1..=4).contains(&quarter) {
            return Err(ReportError::InvalidPeriod(format!("{year}-Q{quarter}")));
        }
        let first = Self::month(year, (quarter - 1) * 3 + 1)?;
        let last = Self::month(year, quarter * 3)?;
        Ok(Self {
            start: first.start,
            end: last.end,
        })
    }

    /// A calendar year.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] if the year is out of range.
    pub fn year(year: i32) -> Result<Self, ReportError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| ReportError::InvalidPeriod(year.to_string()))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| ReportError::InvalidPeriod(year.to_string()))?;
        Ok(Self { start, end })
    }

    /// The calendar month containing `date`.
    ///
    /// # Errors
    ///
    /// Only fails at the very edge of the supported date range.
    pub fn containing_month(date: NaiveDate) -> Result<Self, ReportError> {
        Self::month(date.year(), date.month())
    }

    /// Parses `YYYY-MM`, `YYYY-Qn`, or `YYYY`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidPeriod`] for any other shape.
    pub fn parse(value: &str) -> Result<Self, ReportError> {
        let invalid = || ReportError::InvalidPeriod(value.to_string());
        let value = value.trim();

        match value.split_once('-') {
            None => Self::year(value.parse().map_err(|_| invalid())?),
            Some((year, rest)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                if let Some(quarter) = rest.strip_prefix(['Q', 'q']) {
                    Self::quarter(year, quarter.parse().map_err(|_| invalid())?)
                } else {
                    Self::month(year, rest.parse().map_err(|_| invalid())?)
                }
            }
        }
    }

    /// Returns true if `date` falls within the period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Selects the transactions a statement may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelector {
    /// Flow mode: transactions dated within the period.
    Within(ReportingPeriod),
    /// Point-in-time mode: transactions dated on or before the cutoff.
    AsOf(NaiveDate),
}

impl PeriodSelector {
    /// Flow-mode selector.
    #[must_use]
    pub const fn within(period: ReportingPeriod) -> Self {
        Self::Within(period)
    }

    /// Point-in-time selector.
    #[must_use]
    pub const fn as_of(cutoff: NaiveDate) -> Self {
        Self::AsOf(cutoff)
    }

    /// Returns true if a transaction on `date` is selected.
    #[must_use]
    pub fn includes(&self, date: NaiveDate) -> bool {
        match self {
            Self::Within(period) => period.contains_date(date),
            Self::AsOf(cutoff) => date <= *cutoff,
        }
    }

    /// Iterates over the selected transactions, preserving input order.
    pub fn select<'a>(
        &self,
        transactions: &'a [Transaction],
    ) -> impl Iterator<Item = &'a Transaction> + use<'a> {
        let selector = *self;
        transactions
            .iter()
            .filter(move |transaction| selector.includes(transaction.date))
    }
}
