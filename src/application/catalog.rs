//! Validated game configuration shared by the play services.

use rust_decimal::Decimal;

use crate::domain::blackjack::BlackjackRules;
use crate::domain::darts::DartsTable;
use crate::domain::dice::DiceRules;
use crate::domain::slots::SlotsTable;
use crate::domain::{Amount, GameType, PriceTable};
use crate::error::{GameError, Result};

/// Prices and outcome tables, immutable once built.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    pub prices: PriceTable,
    pub darts: DartsTable,
    pub slots: SlotsTable,
    pub dice: DiceRules,
    pub blackjack: BlackjackRules,
}

impl GameCatalog {
    /// Price of a game, failing loudly when it is not configured.
    pub fn price(&self, game: GameType) -> Result<Amount> {
        self.prices
            .price(game)
            .ok_or_else(|| GameError::UnknownGame(game.to_string()).into())
    }

    /// Long-run fraction of the stake paid back, per game.
    ///
    /// Blackjack depends on player decisions and is not reported.
    #[must_use]
    pub fn expected_return(&self, game: GameType) -> Option<Decimal> {
        match game {
            GameType::Darts => Some(self.darts.expected_return()),
            GameType::Slots => Some(self.slots.expected_return()),
            GameType::Dice => Some(self.dice.expected_return()),
            GameType::Blackjack => None,
        }
    }
}
