//! Telegram bot configuration.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Telegram bot configuration.
///
/// The bot token is never read from the config file; see [`bot_token`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Platform user ids allowed to run admin commands such as `/credit`.
    #[serde(default)]
    pub admin_ids: Vec<u64>,
}

impl TelegramAppConfig {
    /// True when `user_id` may run admin commands.
    #[must_use]
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

/// Read the bot token from the environment.
///
/// # Errors
/// Returns [`ConfigError::MissingField`] if the variable is unset or empty.
pub fn bot_token() -> Result<String> {
    match std::env::var(BOT_TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ConfigError::MissingField {
            field: BOT_TOKEN_ENV,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_ids_are_admins() {
        let config = TelegramAppConfig {
            admin_ids: vec![42],
        };
        assert!(config.is_admin(42));
        assert!(!config.is_admin(7));
    }
}
