//! Tallybook statement generator.
//!
//! Reads a JSON transaction snapshot, validates it, and prints the
//! requested financial statements as JSON on stdout. Logs go to stderr.
//!
//! Usage: tallybook <snapshot.json> --period 2026-03 [--as-of 2026-03-15] [--statement all]

mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallybook_core::{
    BalanceSheet, CashFlowStatement, IncomeStatement, Rejection, ReportError, ReportService,
    ReportingPeriod, Transaction, ValidationSummary, validate_batch,
};
use tallybook_shared::{AppConfig, AppError, BatchPolicy};

use crate::snapshot::SnapshotFile;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tallybook", version, about = "Derive financial statements from a transaction snapshot")]
struct Cli {
    /// Path to the JSON transaction snapshot.
    snapshot: PathBuf,

    /// Reporting period: `YYYY-MM`, `YYYY-Qn`, or `YYYY`.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    period: Option<String>,

    /// Start of a custom period (inclusive).
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// End of a custom period (inclusive).
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// Balance sheet cutoff; defaults to the period end.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Which statement to print.
    #[arg(long, value_enum, default_value_t = Statement::All)]
    statement: Statement,

    /// Refuse the whole snapshot if any record is malformed.
    #[arg(long)]
    reject_invalid: bool,
}

/// Statement selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Statement {
    /// Income statement only.
    Income,
    /// Balance sheet only.
    Balance,
    /// Cash flow statement only.
    CashFlow,
    /// All three.
    All,
}

/// JSON document written to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    validation: ValidationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    income_statement: Option<IncomeStatement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balance_sheet: Option<BalanceSheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cash_flow_statement: Option<CashFlowStatement>,
}

/// JSON document written to stdout when the snapshot is refused.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectedOutput<'a> {
    error: &'static str,
    message: String,
    rejected: &'a [Rejection],
}

impl<'a> RejectedOutput<'a> {
    /// Describes a batch refused under the reject policy, if `err` is one.
    fn from_error(err: &'a ReportError) -> Option<Self> {
        match err {
            ReportError::InvalidBatch { rejected } => Some(Self {
                error: "INVALID_BATCH",
                message: err.to_string(),
                rejected,
            }),
            _ => None,
        }
    }
}

impl Cli {
    /// Resolves the reporting period from `--period` or `--from`/`--to`.
    fn reporting_period(&self) -> Result<ReportingPeriod, ReportError> {
        match (&self.period, self.from, self.to) {
            (Some(period), _, _) => ReportingPeriod::parse(period),
            (None, Some(from), Some(to)) => ReportingPeriod::range(from, to),
            _ => Err(ReportError::InvalidPeriod(
                "either --period or both --from and --to are required".to_string(),
            )),
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tallybook=info,tallybook_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app = err.downcast_ref::<AppError>();
            error!(
                code = app.map_or("INTERNAL_ERROR", AppError::error_code),
                "Statement generation failed: {err:#}"
            );
            ExitCode::from(app.map_or(1, AppError::exit_code))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let period = cli.reporting_period().map_err(AppError::from)?;
    let policy = if cli.reject_invalid {
        BatchPolicy::Reject
    } else {
        config.reporting.batch_policy
    };

    let snapshot = SnapshotFile::load(&cli.snapshot)?;
    info!(
        path = %cli.snapshot.display(),
        business_id = snapshot.business_id().map_or("-", |id| id.as_str()),
        records = snapshot.transactions().len(),
        "Loaded transaction snapshot"
    );

    let batch = match validate_batch(snapshot.transactions(), policy) {
        Ok(batch) => batch,
        Err(err) => {
            if let Some(output) = RejectedOutput::from_error(&err) {
                print_json(&output)?;
            }
            return Err(AppError::from(err).into());
        }
    };
    if !batch.is_clean() {
        warn!(
            rejected = batch.rejected.len(),
            "Statements computed without invalid records"
        );
    }

    let service = ReportService::from_config(&config.reporting);
    let output = render(service, cli, &batch.transactions, period, batch.summary());

    print_json(&output)?;
    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Internal(format!("Failed to encode output: {err}")))?;
    println!("{json}");
    Ok(())
}

/// Builds the requested statements from one validated snapshot.
fn render(
    service: ReportService,
    cli: &Cli,
    transactions: &[Transaction],
    period: ReportingPeriod,
    validation: ValidationSummary,
) -> Output {
    let cutoff = cli.as_of.unwrap_or(period.end);
    let mut output = Output {
        validation,
        income_statement: None,
        balance_sheet: None,
        cash_flow_statement: None,
    };

    match cli.statement {
        Statement::Income => {
            output.income_statement = Some(service.build_income_statement(transactions, period));
        }
        Statement::Balance => {
            output.balance_sheet = Some(service.build_balance_sheet(transactions, cutoff));
        }
        Statement::CashFlow => {
            output.cash_flow_statement =
                Some(service.build_cash_flow_statement(transactions, period));
        }
        Statement::All if cutoff == period.end => {
            let statements = service.build_statements(transactions, period);
            output.income_statement = Some(statements.income_statement);
            output.balance_sheet = Some(statements.balance_sheet);
            output.cash_flow_statement = Some(statements.cash_flow_statement);
        }
        Statement::All => {
            let income = service.build_income_statement(transactions, period);
            output.cash_flow_statement =
                Some(ReportService::build_cash_flow_for_income(&income, transactions));
            output.income_statement = Some(income);
            output.balance_sheet = Some(service.build_balance_sheet(transactions, cutoff));
        }
    }

    output
}
