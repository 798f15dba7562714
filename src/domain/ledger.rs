//! Account and history types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::game::GameType;
use super::id::UserId;
use super::money::Amount;

/// Kind of history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Price of a play, debited.
    Stake,
    /// Payout of a play, credited.
    Winnings,
    /// Externally confirmed deposit, credited.
    TopUp,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntryKind::Stake => "stake",
            EntryKind::Winnings => "winnings",
            EntryKind::TopUp => "top_up",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stake" => Ok(EntryKind::Stake),
            "winnings" => Ok(EntryKind::Winnings),
            "top_up" => Ok(EntryKind::TopUp),
            other => Err(format!("unknown entry kind `{other}`")),
        }
    }
}

/// A balance change to be committed.
///
/// `delta` is signed: stakes are negative, winnings and top-ups positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub kind: EntryKind,
    pub game: Option<GameType>,
    pub delta: Amount,
    pub detail: String,
}

impl Posting {
    /// Debit of a play's price.
    pub fn stake(game: GameType, amount: Amount, detail: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Stake,
            game: Some(game),
            delta: -amount,
            detail: detail.into(),
        }
    }

    /// Credit of a play's payout.
    pub fn winnings(game: GameType, amount: Amount, detail: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Winnings,
            game: Some(game),
            delta: amount,
            detail: detail.into(),
        }
    }

    /// Credit of an external deposit.
    pub fn top_up(amount: Amount, reference: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::TopUp,
            game: None,
            delta: amount,
            detail: reference.into(),
        }
    }
}

/// A committed history entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub user_id: UserId,
    pub kind: EntryKind,
    pub game: Option<GameType>,
    pub delta: Amount,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Stamp a posting as committed for `user_id`.
    #[must_use]
    pub fn committed(user_id: &UserId, posting: &Posting, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.clone(),
            kind: posting.kind,
            game: posting.game,
            delta: posting.delta,
            detail: posting.detail.clone(),
            created_at,
        }
    }
}

/// Apply postings to a balance in order, returning the final balance or the
/// first balance that would go negative.
///
/// # Errors
/// Returns the offending intermediate balance if any step goes below zero.
pub fn apply_postings(balance: Amount, postings: &[Posting]) -> Result<Amount, Amount> {
    postings.iter().try_fold(balance, |running, posting| {
        let next = running + posting.delta;
        if next < Decimal::ZERO {
            Err(running)
        } else {
            Ok(next)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stake_postings_are_negative() {
        let posting = Posting::stake(GameType::Darts, dec!(1.00), "darts");
        assert_eq!(posting.delta, dec!(-1.00));
        assert_eq!(posting.kind, EntryKind::Stake);
    }

    #[test]
    fn apply_postings_runs_in_order() {
        let postings = [
            Posting::stake(GameType::Dice, dec!(1.00), "dice"),
            Posting::winnings(GameType::Dice, dec!(2.00), "guessed 4"),
        ];
        assert_eq!(apply_postings(dec!(5.00), &postings), Ok(dec!(6.00)));
    }

    #[test]
    fn apply_postings_rejects_overdraft_before_credit() {
        // The stake must be covered on its own even if winnings follow.
        let postings = [
            Posting::stake(GameType::Dice, dec!(1.00), "dice"),
            Posting::winnings(GameType::Dice, dec!(2.00), "guessed 4"),
        ];
        assert_eq!(apply_postings(dec!(0.50), &postings), Err(dec!(0.50)));
    }

    #[test]
    fn entry_kind_parses_storage_names() {
        for kind in [EntryKind::Stake, EntryKind::Winnings, EntryKind::TopUp] {
            assert_eq!(kind.as_str().parse::<EntryKind>().unwrap(), kind);
        }
        assert!("refund".parse::<EntryKind>().is_err());
    }
}
