use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Balance and ledger errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("insufficient funds: need {required}, have {balance}")]
    InsufficientFunds { required: Decimal, balance: Decimal },

    #[error("amount must not be negative, got {amount}")]
    NegativeAmount { amount: Decimal },

    #[error("amount must be greater than 0, got {amount}")]
    NonPositiveAmount { amount: Decimal },
}

/// Errors raised while routing or playing a game command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("unknown game `{0}`")]
    UnknownGame(String),

    #[error("{reason}\nusage: {usage}")]
    InvalidArgument { reason: String, usage: &'static str },

    #[error("a blackjack hand is already in progress")]
    HandInProgress,

    #[error("no blackjack hand in progress")]
    NoActiveHand,
}

/// Storage errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// True for errors caused by the player's input or balance rather than
    /// by the bot itself.
    ///
    /// An unknown game only reaches a player when the game is unpriced, which
    /// is an operator mistake.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        match self {
            Error::Game(GameError::UnknownGame(_)) => false,
            Error::Domain(_) | Error::Ledger(_) | Error::Game(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Persistence(PersistenceError::Database(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insufficient_funds_names_both_amounts() {
        let err = Error::from(LedgerError::InsufficientFunds {
            required: dec!(1.00),
            balance: dec!(0.50),
        });
        assert_eq!(err.to_string(), "insufficient funds: need 1.00, have 0.50");
        assert!(err.is_user_facing());
    }

    #[test]
    fn invalid_argument_includes_usage() {
        let err = GameError::InvalidArgument {
            reason: "guess must be a number".into(),
            usage: "/dice <1-6>",
        };
        assert!(err.to_string().ends_with("usage: /dice <1-6>"));
    }

    #[test]
    fn unknown_game_is_internal() {
        let err = Error::from(GameError::UnknownGame("blackjack".into()));
        assert!(!err.is_user_facing());
        assert!(Error::from(GameError::NoActiveHand).is_user_facing());
    }

    #[test]
    fn persistence_errors_are_internal() {
        let err = Error::from(PersistenceError::Database("locked".into()));
        assert!(!err.is_user_facing());
    }
}
