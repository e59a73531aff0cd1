//! Reporting periods and the two transaction selection modes.
//!
//! Flow statements (income, cash flow) look at transactions *within* a
//! period. The balance sheet looks at every transaction *on or before*
//! a cutoff date.

pub mod selector;

pub use selector::{PeriodSelector, ReportingPeriod};
