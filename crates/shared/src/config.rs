//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Statement generation settings.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Statement generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Currency code stamped on every generated report.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// What to do with a snapshot that contains malformed transactions.
    #[serde(default)]
    pub batch_policy: BatchPolicy,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            batch_policy: BatchPolicy::default(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Usd
}

/// Handling of malformed records within one transaction snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPolicy {
    /// Drop malformed records, report them, and compute over the rest.
    #[default]
    Skip,
    /// Refuse the whole snapshot if any record is malformed.
    Reject,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLYBOOK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLYBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
