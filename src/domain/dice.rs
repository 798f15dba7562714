//! Dice outcome generator.

use std::fmt;

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::DomainError;
use super::outcome::Outcome;

/// Faces on the die.
pub const FACES: u8 = 6;

/// A validated guess in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceGuess(u8);

impl DiceGuess {
    /// Validate a guess.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidGuess`] unless `1 <= guess <= 6`.
    pub fn new(guess: i64) -> Result<Self, DomainError> {
        match u8::try_from(guess) {
            Ok(face) if (1..=FACES).contains(&face) => Ok(Self(face)),
            _ => Err(DomainError::InvalidGuess { guess }),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DiceGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payout rules for the dice game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceRules {
    /// Multiplier applied to the stake on a correct guess.
    pub multiplier: Decimal,
}

impl Default for DiceRules {
    fn default() -> Self {
        Self {
            multiplier: dec!(2),
        }
    }
}

impl DiceRules {
    /// Create rules with a payout multiplier.
    ///
    /// # Errors
    /// Returns an error if the multiplier is negative.
    pub fn try_new(multiplier: Decimal) -> Result<Self, DomainError> {
        if multiplier < Decimal::ZERO {
            return Err(DomainError::NegativeMultiplier {
                table: "dice",
                entry: "multiplier".to_string(),
                multiplier,
            });
        }
        Ok(Self { multiplier })
    }

    /// Roll one die.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
        rng.gen_range(1..=FACES)
    }

    /// Expected payout per unit staked.
    #[must_use]
    pub fn expected_return(&self) -> Decimal {
        self.multiplier / Decimal::from(FACES)
    }

    /// Roll against a guess.
    pub fn play<R: Rng + ?Sized>(&self, guess: DiceGuess, rng: &mut R) -> Outcome {
        self.resolve(guess, Self::roll(rng))
    }

    /// Outcome for a known roll.
    #[must_use]
    pub fn resolve(&self, guess: DiceGuess, roll: u8) -> Outcome {
        let detail = format!("guessed {guess}, rolled {roll}");
        if guess.value() == roll {
            Outcome::new(
                self.multiplier,
                format!("🎲 You guessed {guess}... the die shows {roll}!"),
                detail,
            )
        } else {
            Outcome::new(
                Decimal::ZERO,
                format!("🎲 You guessed {guess}... the die shows {roll}."),
                detail,
            )
        }
    }
}
