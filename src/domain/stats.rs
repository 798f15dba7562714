//! Per-player statistics aggregated from ledger history.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::game::GameType;
use super::ledger::{EntryKind, LedgerEntry};
use super::money::Amount;

/// Totals for a single game.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameStats {
    pub plays: u64,
    pub wins: u64,
    pub wagered: Amount,
    pub won: Amount,
}

impl GameStats {
    /// Winnings minus stakes.
    #[must_use]
    pub fn net(&self) -> Amount {
        self.won - self.wagered
    }

    /// Fraction of plays that paid anything, or zero without plays.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        if self.plays == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.wins) / Decimal::from(self.plays)
    }
}

/// Aggregate statistics for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub total: GameStats,
    pub topped_up: Amount,
    pub per_game: BTreeMap<GameType, GameStats>,
}

impl PlayerStats {
    /// Fold a player's history into statistics.
    ///
    /// Every stake entry counts as one play and every winnings entry as one
    /// paying play, so a blackjack push counts as a win.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            match entry.kind {
                EntryKind::TopUp => stats.topped_up += entry.delta,
                EntryKind::Stake => {
                    let wager = -entry.delta;
                    stats.total.plays += 1;
                    stats.total.wagered += wager;
                    if let Some(game) = entry.game {
                        let per_game = stats.per_game.entry(game).or_default();
                        per_game.plays += 1;
                        per_game.wagered += wager;
                    }
                }
                EntryKind::Winnings => {
                    stats.total.wins += 1;
                    stats.total.won += entry.delta;
                    if let Some(game) = entry.game {
                        let per_game = stats.per_game.entry(game).or_default();
                        per_game.wins += 1;
                        per_game.won += entry.delta;
                    }
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::UserId;
    use crate::domain::ledger::Posting;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn entries(postings: &[Posting]) -> Vec<LedgerEntry> {
        let user = UserId::from("7");
        let now = Utc::now();
        postings
            .iter()
            .map(|p| LedgerEntry::committed(&user, p, now))
            .collect()
    }

    #[test]
    fn empty_history_has_zero_stats() {
        let stats = PlayerStats::from_entries(&Vec::<LedgerEntry>::new());
        assert_eq!(stats.total.plays, 0);
        assert_eq!(stats.total.win_rate(), Decimal::ZERO);
        assert!(stats.per_game.is_empty());
    }

    #[test]
    fn aggregates_plays_wins_and_top_ups() {
        let history = entries(&[
            Posting::top_up(dec!(10.00), "tx-1"),
            Posting::stake(GameType::Dice, dec!(1.00), "dice"),
            Posting::winnings(GameType::Dice, dec!(2.00), "guessed 4, rolled 4"),
            Posting::stake(GameType::Darts, dec!(1.00), "darts"),
            Posting::stake(GameType::Dice, dec!(1.00), "dice"),
        ]);

        let stats = PlayerStats::from_entries(&history);

        assert_eq!(stats.topped_up, dec!(10.00));
        assert_eq!(stats.total.plays, 3);
        assert_eq!(stats.total.wins, 1);
        assert_eq!(stats.total.wagered, dec!(3.00));
        assert_eq!(stats.total.net(), dec!(-1.00));

        let dice = &stats.per_game[&GameType::Dice];
        assert_eq!(dice.plays, 2);
        assert_eq!(dice.win_rate(), dec!(0.5));
        assert_eq!(dice.net(), Decimal::ZERO);
    }
}
