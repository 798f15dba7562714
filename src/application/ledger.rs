//! Ledger service.
//!
//! Owns every balance mutation. Operations on one user are serialized by a
//! per-user lock; different users proceed in parallel. Each mutation is
//! committed to the store before the call returns.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{
    Amount, GameResult, GameType, LedgerEntry, Outcome, PlayerStats, Posting, UserId,
};
use crate::error::{LedgerError, Result};
use crate::port::outbound::store::AccountStore;

/// Per-user balance book over an [`AccountStore`].
pub struct Ledger {
    store: Arc<dyn AccountStore>,
    starting_balance: Amount,
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl Ledger {
    /// Create a ledger that opens new accounts with `starting_balance`.
    pub fn new(store: Arc<dyn AccountStore>, starting_balance: Amount) -> Self {
        Self {
            store,
            starting_balance,
            locks: DashMap::new(),
        }
    }

    /// Run `f` while holding `user`'s lock.
    ///
    /// The lock entry is dropped again once no other caller holds it, so the
    /// table only grows with concurrently active users.
    fn locked<T>(&self, user: &UserId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self.locks.entry(user.clone()).or_default().value().clone();
        let result = {
            let _guard = lock.lock();
            f()
        };
        drop(lock);
        self.locks.remove_if(user, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    fn open(&self, user: &UserId) -> Result<Amount> {
        self.store.open_account(user, self.starting_balance)
    }

    fn check_non_negative(amount: Amount) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount { amount }.into());
        }
        Ok(())
    }

    fn check_positive(amount: Amount) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount { amount }.into());
        }
        Ok(())
    }

    /// Current balance. Unknown users get an account with the starting
    /// balance.
    pub fn get_balance(&self, user: &UserId) -> Result<Amount> {
        self.locked(user, || self.open(user))
    }

    /// True iff the balance covers `cost`.
    pub fn can_afford(&self, user: &UserId, cost: Amount) -> Result<bool> {
        Ok(self.get_balance(user)? >= cost)
    }

    /// Take a stake for `game`. Never mutates when the balance is short.
    pub fn debit(&self, user: &UserId, cost: Amount, game: GameType) -> Result<Amount> {
        Self::check_non_negative(cost)?;
        self.locked(user, || {
            let balance = self.open(user)?;
            if balance < cost {
                return Err(LedgerError::InsufficientFunds {
                    required: cost,
                    balance,
                }
                .into());
            }
            let balance = self
                .store
                .apply(user, &[Posting::stake(game, cost, game.as_str())])?;
            debug!(user_id = %user, game = %game, cost = %cost, balance = %balance, "Debited stake");
            Ok(balance)
        })
    }

    /// Pay winnings for `game`.
    pub fn credit(
        &self,
        user: &UserId,
        amount: Amount,
        game: GameType,
        detail: impl Into<String>,
    ) -> Result<Amount> {
        Self::check_non_negative(amount)?;
        let posting = Posting::winnings(game, amount, detail);
        self.locked(user, || {
            self.open(user)?;
            let balance = self.store.apply(user, &[posting])?;
            debug!(user_id = %user, game = %game, amount = %amount, balance = %balance, "Credited winnings");
            Ok(balance)
        })
    }

    /// Credit an externally confirmed deposit. The amount must be above zero.
    pub fn top_up(
        &self,
        user: &UserId,
        amount: Amount,
        reference: impl Into<String>,
    ) -> Result<Amount> {
        Self::check_positive(amount)?;
        let reference = reference.into();
        self.locked(user, || {
            self.open(user)?;
            let balance = self
                .store
                .apply(user, &[Posting::top_up(amount, reference.as_str())])?;
            info!(user_id = %user, amount = %amount, reference = %reference, balance = %balance, "Top-up credited");
            Ok(balance)
        })
    }

    /// Play one round as a single unit: check the balance, draw the outcome,
    /// then commit the stake and any winnings in one store transaction.
    ///
    /// `play` only runs once the stake is known to be covered.
    pub fn settle(
        &self,
        user: &UserId,
        game: GameType,
        stake: Amount,
        play: impl FnOnce() -> Outcome,
    ) -> Result<GameResult> {
        Self::check_non_negative(stake)?;
        let (outcome, payout, balance) = self.locked(user, || {
            let balance = self.open(user)?;
            if balance < stake {
                return Err(LedgerError::InsufficientFunds {
                    required: stake,
                    balance,
                }
                .into());
            }

            let outcome = play();
            let payout = outcome.payout(stake);
            let mut postings = vec![Posting::stake(game, stake, outcome.detail.as_str())];
            if payout > Decimal::ZERO {
                postings.push(Posting::winnings(game, payout, outcome.detail.as_str()));
            }
            let balance = self.store.apply(user, &postings)?;
            Ok((outcome, payout, balance))
        })?;

        info!(
            user_id = %user,
            game = %game,
            stake = %stake,
            payout = %payout,
            balance = %balance,
            "Play settled"
        );

        Ok(GameResult {
            game,
            stake,
            outcome,
            payout,
            balance,
        })
    }

    /// Most recent entries, newest first.
    pub fn history(&self, user: &UserId, limit: usize) -> Result<Vec<LedgerEntry>> {
        self.store.history(user, limit)
    }

    /// Aggregate statistics over the user's full history.
    pub fn stats(&self, user: &UserId) -> Result<PlayerStats> {
        let entries = self.store.entries(user)?;
        Ok(PlayerStats::from_entries(&entries))
    }
}
