//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the bot token comes from the
//! `TELEGRAM_BOT_TOKEN` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use casinobot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::games::GamesConfig;
use super::ledger::{LedgerConfig, TopUpConfig};
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::application::catalog::GameCatalog;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to SQLite database file.
    ///
    /// Defaults to "casinobot.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Account defaults.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Deposit instructions.
    #[serde(default)]
    pub topup: TopUpConfig,

    /// Prices and outcome tables.
    #[serde(default)]
    pub games: GamesConfig,
}

fn default_database_path() -> String {
    "casinobot.db".to_string()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., probabilities that do not sum to 1)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        self.logging.validate()?;
        self.ledger.validate()?;
        self.topup.validate()?;
        self.games.catalog()?;
        Ok(())
    }

    /// Build the validated game catalog.
    ///
    /// # Errors
    /// Returns an error if a table fails validation.
    pub fn catalog(&self) -> Result<GameCatalog> {
        self.games.catalog()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameType;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.database, "casinobot.db");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.ledger.history_limit, 10);
        assert_eq!(config.topup.currency, "LTC");
        assert!(config.telegram.admin_ids.is_empty());
    }

    #[test]
    fn prices_are_keyed_by_game_name() {
        let config = Config::parse_toml(
            r#"
[games.prices]
darts = 1.00
dice = "0.50"
"#,
        )
        .unwrap();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.prices.price(GameType::Darts), Some(dec!(1.00)));
        assert_eq!(catalog.prices.price(GameType::Dice), Some(dec!(0.50)));
        assert_eq!(catalog.prices.price(GameType::Blackjack), None);
    }

    #[test]
    fn unknown_game_in_prices_is_a_parse_error() {
        let err = Config::parse_toml("[games.prices]\nroulette = 1.0\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn bad_log_format_is_rejected() {
        let err = Config::parse_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "logging.format", .. })
        ));
    }

    #[test]
    fn negative_starting_balance_is_rejected() {
        let err = Config::parse_toml("[ledger]\nstarting_balance = -1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "ledger.starting_balance", .. })
        ));
    }
}
