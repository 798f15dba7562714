//! Game price table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::game::GameType;
use super::money::Amount;

/// Fixed cost per game, loaded once from configuration.
///
/// A game missing from the table is unconfigured and cannot be played;
/// there is no fallback price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<GameType, Amount>,
}

impl PriceTable {
    #[must_use]
    pub fn new(prices: BTreeMap<GameType, Amount>) -> Self {
        Self { prices }
    }

    /// Price of a game, if configured.
    #[must_use]
    pub fn price(&self, game: GameType) -> Option<Amount> {
        self.prices.get(&game).copied()
    }

    /// Configured games and prices in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (GameType, Amount)> + '_ {
        self.prices.iter().map(|(game, price)| (*game, *price))
    }

    /// Games in the catalog with no configured price.
    #[must_use]
    pub fn unpriced(&self) -> Vec<GameType> {
        GameType::ALL
            .into_iter()
            .filter(|game| !self.prices.contains_key(game))
            .collect()
    }

    /// First non-positive price, if any.
    #[must_use]
    pub fn first_non_positive(&self) -> Option<(GameType, Amount)> {
        self.iter().find(|(_, price)| *price <= Decimal::ZERO)
    }
}

impl FromIterator<(GameType, Amount)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (GameType, Amount)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
