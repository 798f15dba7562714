//! Game prices and outcome table configuration.
//!
//! Tables default to the stock boards; prices have no default, so a game
//! left out of `[games.prices]` cannot be played.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::application::catalog::GameCatalog;
use crate::domain::blackjack::BlackjackRules;
use crate::domain::darts::{default_zones, DartZone, DartsTable};
use crate::domain::dice::DiceRules;
use crate::domain::slots::{default_symbols, SlotSymbol, SlotsTable};
use crate::domain::{GameType, PriceTable};
use crate::error::{ConfigError, Result};

/// `[games]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesConfig {
    /// Fixed cost per game.
    #[serde(default)]
    pub prices: BTreeMap<GameType, Decimal>,
    #[serde(default)]
    pub darts: DartsConfig,
    #[serde(default)]
    pub slots: SlotsConfig,
    #[serde(default)]
    pub dice: DiceConfig,
    #[serde(default)]
    pub blackjack: BlackjackConfig,
}

/// `[games.darts]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DartsConfig {
    #[serde(default = "default_zones")]
    pub zones: Vec<DartZone>,
}

impl Default for DartsConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}

/// `[games.slots]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotsConfig {
    #[serde(default = "default_symbols")]
    pub symbols: Vec<SlotSymbol>,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
        }
    }
}

/// `[games.dice]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DiceConfig {
    #[serde(default = "default_dice_multiplier")]
    pub multiplier: Decimal,
}

fn default_dice_multiplier() -> Decimal {
    dec!(2)
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            multiplier: default_dice_multiplier(),
        }
    }
}

/// `[games.blackjack]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BlackjackConfig {
    #[serde(default = "default_blackjack_multiplier")]
    pub blackjack_multiplier: Decimal,
    #[serde(default = "default_win_multiplier")]
    pub win_multiplier: Decimal,
    #[serde(default = "default_push_multiplier")]
    pub push_multiplier: Decimal,
    #[serde(default)]
    pub dealer_hits_soft_17: bool,
}

fn default_blackjack_multiplier() -> Decimal {
    dec!(2.5)
}

fn default_win_multiplier() -> Decimal {
    dec!(2)
}

fn default_push_multiplier() -> Decimal {
    dec!(1)
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            blackjack_multiplier: default_blackjack_multiplier(),
            win_multiplier: default_win_multiplier(),
            push_multiplier: default_push_multiplier(),
            dealer_hits_soft_17: false,
        }
    }
}

impl BlackjackConfig {
    fn rules(&self) -> BlackjackRules {
        BlackjackRules {
            blackjack_multiplier: self.blackjack_multiplier,
            win_multiplier: self.win_multiplier,
            push_multiplier: self.push_multiplier,
            dealer_hits_soft_17: self.dealer_hits_soft_17,
        }
    }
}

impl GamesConfig {
    /// Validate every table and build the immutable catalog.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending section.
    pub fn catalog(&self) -> Result<GameCatalog> {
        let prices = PriceTable::new(self.prices.clone());
        if let Some((game, price)) = prices.first_non_positive() {
            return Err(ConfigError::InvalidValue {
                field: "games.prices",
                reason: format!("price for {game} must be greater than 0, got {price}"),
            }
            .into());
        }

        let darts = DartsTable::try_new(self.darts.zones.clone()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "games.darts",
                reason: e.to_string(),
            }
        })?;
        let slots = SlotsTable::try_new(self.slots.symbols.clone()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "games.slots",
                reason: e.to_string(),
            }
        })?;
        let dice = DiceRules::try_new(self.dice.multiplier).map_err(|e| {
            ConfigError::InvalidValue {
                field: "games.dice",
                reason: e.to_string(),
            }
        })?;
        let blackjack = self.blackjack.rules();
        blackjack.validate().map_err(|e| ConfigError::InvalidValue {
            field: "games.blackjack",
            reason: e.to_string(),
        })?;

        Ok(GameCatalog {
            prices,
            darts,
            slots,
            dice,
            blackjack,
        })
    }
}
