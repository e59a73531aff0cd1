//! Financial statement generation.
//!
//! This module provides pure business logic for deriving statements from
//! a flat transaction snapshot:
//! - Income Statement (flow, within a period)
//! - Balance Sheet (point in time, up to a cutoff)
//! - Cash Flow Statement (flow, indirect method)

mod balance;
mod cash_flow;
pub mod error;
mod income;
pub mod service;
mod totals;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
