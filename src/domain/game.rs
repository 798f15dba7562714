//! Game catalog types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Games offered by the casino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Darts,
    Slots,
    Dice,
    Blackjack,
}

impl GameType {
    /// All games in display order.
    pub const ALL: [GameType; 4] = [
        GameType::Darts,
        GameType::Slots,
        GameType::Dice,
        GameType::Blackjack,
    ];

    /// Lowercase identifier used in commands, config keys and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameType::Darts => "darts",
            GameType::Slots => "slots",
            GameType::Dice => "dice",
            GameType::Blackjack => "blackjack",
        }
    }

    /// Emoji shown in banners.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            GameType::Darts => "🎯",
            GameType::Slots => "🎰",
            GameType::Dice => "🎲",
            GameType::Blackjack => "🃏",
        }
    }

    /// Whether the game resolves in a single command.
    #[must_use]
    pub const fn is_quick_play(self) -> bool {
        !matches!(self, GameType::Blackjack)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a game name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGameName(pub String);

impl fmt::Display for UnknownGameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game `{}`", self.0)
    }
}

impl std::error::Error for UnknownGameName {}

impl FromStr for GameType {
    type Err = UnknownGameName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darts" => Ok(GameType::Darts),
            "slots" => Ok(GameType::Slots),
            "dice" => Ok(GameType::Dice),
            "blackjack" | "bj" => Ok(GameType::Blackjack),
            _ => Err(UnknownGameName(s.to_string())),
        }
    }
}
