//! Ledger and top-up configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Account defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Balance granted to a new account.
    #[serde(default)]
    pub starting_balance: Decimal,
    /// Entries shown by `/history`.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

const fn default_history_limit() -> usize {
    10
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_balance: Decimal::ZERO,
            history_limit: default_history_limit(),
        }
    }
}

impl LedgerConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.starting_balance < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "ledger.starting_balance",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ledger.history_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Deposit instructions shown by `/topup`.
///
/// Deposits are confirmed outside the bot; an operator credits them with
/// `/credit` or `casinobot account credit`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopUpConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Deposit address. Without one, `/topup` tells users to contact an admin.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_min_amount")]
    pub min_amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_currency() -> String {
    "LTC".to_string()
}

fn default_min_amount() -> Decimal {
    dec!(1)
}

impl Default for TopUpConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            address: None,
            min_amount: default_min_amount(),
            note: None,
        }
    }
}

impl TopUpConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_amount <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "topup.min_amount",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
