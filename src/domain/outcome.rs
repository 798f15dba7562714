//! Outcomes produced by the game generators and the results of settled plays.

use rust_decimal::Decimal;
use serde::Serialize;

use super::game::GameType;
use super::money::Amount;

/// Result stub returned by an outcome generator.
///
/// Generators never see the stake; they only report the multiplier applied
/// to it and describe what happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Payout multiplier applied to the stake (0 for a loss).
    pub multiplier: Decimal,
    /// Player-facing description of the draw.
    pub narrative: String,
    /// Short descriptor recorded in the ledger history.
    pub detail: String,
}

impl Outcome {
    /// Create an outcome.
    pub fn new(multiplier: Decimal, narrative: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            multiplier,
            narrative: narrative.into(),
            detail: detail.into(),
        }
    }

    /// True when the outcome pays anything back.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.multiplier > Decimal::ZERO
    }

    /// Payout for the given stake.
    #[must_use]
    pub fn payout(&self, stake: Amount) -> Amount {
        stake * self.multiplier
    }
}

/// A settled play: the outcome plus its effect on the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub game: GameType,
    pub stake: Amount,
    pub outcome: Outcome,
    pub payout: Amount,
    pub balance: Amount,
}

impl GameResult {
    /// True when the play credited a payout.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.payout > Decimal::ZERO
    }

    /// Net change to the balance (payout minus stake).
    #[must_use]
    pub fn net(&self) -> Amount {
        self.payout - self.stake
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_multiplier_is_a_loss() {
        let outcome = Outcome::new(Decimal::ZERO, "miss", "miss");
        assert!(!outcome.is_win());
        assert_eq!(outcome.payout(dec!(1.00)), Decimal::ZERO);
    }

    #[test]
    fn payout_scales_with_stake() {
        let outcome = Outcome::new(dec!(2.5), "blackjack", "blackjack");
        assert_eq!(outcome.payout(dec!(2.00)), dec!(5.00));
    }

    #[test]
    fn game_result_net_accounts_for_stake() {
        let result = GameResult {
            game: GameType::Dice,
            stake: dec!(1.00),
            outcome: Outcome::new(dec!(2), "rolled 3", "guessed 3"),
            payout: dec!(2.00),
            balance: dec!(6.00),
        };
        assert!(result.is_win());
        assert_eq!(result.net(), dec!(1.00));
    }
}
