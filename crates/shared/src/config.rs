//! Application configuration management.

use serde::Deserialize;

use crate::types::{CurrencyCode, Denomination};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Banknotes loaded into the dispenser at startup.
    #[serde(default = "default_cassettes")]
    pub cassettes: Vec<CassetteConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "cashbox=info".to_string()
}

/// One initial deposit: a currency and the notes loaded for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CassetteConfig {
    /// Currency of the notes.
    pub currency: CurrencyCode,
    /// Face values of the notes, repeats allowed.
    pub notes: Vec<Denomination>,
}

fn default_cassettes() -> Vec<CassetteConfig> {
    vec![
        CassetteConfig {
            currency: CurrencyCode::Rub,
            notes: vec![50, 100, 100, 500, 50, 1000, 100, 100, 1000, 5000],
        },
        CassetteConfig {
            currency: CurrencyCode::Usd,
            notes: vec![100, 100, 100],
        },
        CassetteConfig {
            currency: CurrencyCode::Kzt,
            notes: vec![1, 1, 1, 1, 1],
        },
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            cassettes: default_cassettes(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CASHBOX").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has wrong types.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
