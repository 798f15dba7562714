//! Domain validation errors for game tables and plays.
//!
//! This module defines errors that occur when domain invariants are violated.
//! Table constructors return them when a probability or payout table cannot
//! be audited, and the outcome generators return them for invalid input.
//!
//! # Examples
//!
//! ```
//! use casinobot::domain::dice::DiceGuess;
//! use casinobot::domain::error::DomainError;
//!
//! assert!(matches!(DiceGuess::new(7), Err(DomainError::InvalidGuess { guess: 7 })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Dice guesses must name a face of a six-sided die.
    #[error("guess must be between 1 and 6, got {guess}")]
    InvalidGuess {
        /// The rejected guess.
        guess: i64,
    },

    /// A probability table must contain at least one entry.
    #[error("{table} table cannot be empty")]
    EmptyTable {
        /// Which table was empty.
        table: &'static str,
    },

    /// Individual probabilities must lie in `[0, 1]`.
    #[error("{table} probability for `{entry}` must be between 0 and 1, got {probability}")]
    ProbabilityOutOfRange {
        /// Which table holds the entry.
        table: &'static str,
        /// Name of the offending entry.
        entry: String,
        /// The invalid probability.
        probability: Decimal,
    },

    /// Probabilities of a table must sum to exactly one.
    #[error("{table} probabilities must sum to 1, got {sum}")]
    ProbabilitySum {
        /// Which table was unbalanced.
        table: &'static str,
        /// The actual sum.
        sum: Decimal,
    },

    /// Payout multipliers cannot be negative.
    #[error("{table} multiplier for `{entry}` cannot be negative, got {multiplier}")]
    NegativeMultiplier {
        /// Which table holds the entry.
        table: &'static str,
        /// Name of the offending entry.
        entry: String,
        /// The invalid multiplier.
        multiplier: Decimal,
    },

    /// Entry names in a table must be unique.
    #[error("{table} entry `{entry}` is defined more than once")]
    DuplicateEntry {
        /// Which table holds the duplicate.
        table: &'static str,
        /// The duplicated name.
        entry: String,
    },

    /// The deck ran out of cards mid-hand.
    #[error("the deck is out of cards")]
    DeckExhausted,

    /// A blackjack action was issued in a phase that does not accept it.
    #[error("cannot {action} while the hand is {phase}")]
    InvalidPhase {
        /// The attempted action.
        action: &'static str,
        /// The current phase name.
        phase: &'static str,
    },
}
