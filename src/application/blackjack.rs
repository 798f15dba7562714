//! Interactive blackjack tables.
//!
//! Each user has at most one open hand. The wager is debited when the hand
//! is dealt and held by the session; the payout is credited when it
//! settles. A settled hand whose credit failed stays open so the next
//! `hit` or `stand` retries the credit.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::ledger::Ledger;
use crate::domain::blackjack::{BlackjackRules, BlackjackSession, Deck, Phase};
use crate::domain::{Amount, DomainError, GameResult, GameType, UserId};
use crate::error::{GameError, Result};

type StepResult = std::result::Result<Phase, DomainError>;

/// What a blackjack command produced.
#[derive(Debug, Clone)]
pub enum BlackjackReport {
    /// Rules and price, plus the open hand if there is one.
    Info {
        price: Amount,
        rules: BlackjackRules,
        table: Option<String>,
    },
    /// The hand continues; waiting for hit or stand.
    InPlay { table: String, wager: Amount },
    /// The hand is over and the ledger is settled.
    Settled(GameResult),
}

type Seat = Arc<Mutex<Option<BlackjackSession>>>;

/// Open hands keyed by user.
///
/// The map only hands out seats; a seat's mutex is what guards the hand, so
/// ledger calls never run under a map shard lock.
pub struct BlackjackTables {
    ledger: Arc<Ledger>,
    rules: BlackjackRules,
    seats: DashMap<UserId, Seat>,
}

impl BlackjackTables {
    pub fn new(ledger: Arc<Ledger>, rules: BlackjackRules) -> Self {
        Self {
            ledger,
            rules,
            seats: DashMap::new(),
        }
    }

    fn seat(&self, user: &UserId) -> Seat {
        Arc::clone(self.seats.entry(user.clone()).or_default().value())
    }

    fn existing_seat(&self, user: &UserId) -> Option<Seat> {
        self.seats.get(user).map(|seat| Arc::clone(seat.value()))
    }

    /// Drop the seat once its hand is gone and nobody else holds it.
    fn release(&self, user: &UserId, seat: Seat) {
        drop(seat);
        self.seats
            .remove_if(user, |_, seat| Arc::strong_count(seat) == 1 && seat.lock().is_none());
    }

    /// Describe the game and any open hand.
    #[must_use]
    pub fn info(&self, user: &UserId, price: Amount) -> BlackjackReport {
        let table = self
            .existing_seat(user)
            .and_then(|seat| seat.lock().as_ref().map(BlackjackSession::table_view));
        BlackjackReport::Info {
            price,
            rules: self.rules,
            table,
        }
    }

    /// True when the user has an open hand.
    #[must_use]
    pub fn has_open_hand(&self, user: &UserId) -> bool {
        self.existing_seat(user)
            .is_some_and(|seat| seat.lock().is_some())
    }

    /// Debit `price` and deal a new hand from `deck`.
    pub fn deal(&self, user: &UserId, price: Amount, deck: Deck) -> Result<BlackjackReport> {
        let seat = self.seat(user);
        let result = {
            let mut hand = seat.lock();
            self.deal_into(&mut hand, user, price, deck)
        };
        self.release(user, seat);
        result
    }

    fn deal_into(
        &self,
        hand: &mut Option<BlackjackSession>,
        user: &UserId,
        price: Amount,
        deck: Deck,
    ) -> Result<BlackjackReport> {
        if hand.is_some() {
            return Err(GameError::HandInProgress.into());
        }

        self.ledger.debit(user, price, GameType::Blackjack)?;
        let mut session = BlackjackSession::with_deck(price, deck);
        if let Err(err) = session.deal(&self.rules) {
            warn!(user_id = %user, error = %err, "Deal failed, refunding wager");
            self.ledger
                .credit(user, price, GameType::Blackjack, "refund: deal failed")?;
            return Err(err.into());
        }
        info!(user_id = %user, wager = %price, "Blackjack hand dealt");

        if session.phase() == Phase::Settled {
            return match self.finish(user, &session) {
                Ok(result) => Ok(BlackjackReport::Settled(result)),
                Err(err) => {
                    *hand = Some(session);
                    Err(err)
                }
            };
        }
        let table = session.table_view();
        *hand = Some(session);
        Ok(BlackjackReport::InPlay { table, wager: price })
    }

    /// Draw a card for the player.
    pub fn hit(&self, user: &UserId) -> Result<BlackjackReport> {
        self.advance(user, |session, rules| session.hit(rules))
    }

    /// Stop drawing and let the dealer play.
    pub fn stand(&self, user: &UserId) -> Result<BlackjackReport> {
        self.advance(user, |session, rules| session.stand(rules))
    }

    fn advance(
        &self,
        user: &UserId,
        action: impl FnOnce(&mut BlackjackSession, &BlackjackRules) -> StepResult,
    ) -> Result<BlackjackReport> {
        let Some(seat) = self.existing_seat(user) else {
            return Err(GameError::NoActiveHand.into());
        };
        let result = {
            let mut hand = seat.lock();
            self.advance_hand(&mut hand, user, action)
        };
        self.release(user, seat);
        result
    }

    fn advance_hand(
        &self,
        hand: &mut Option<BlackjackSession>,
        user: &UserId,
        action: impl FnOnce(&mut BlackjackSession, &BlackjackRules) -> StepResult,
    ) -> Result<BlackjackReport> {
        let Some(session) = hand.as_mut() else {
            return Err(GameError::NoActiveHand.into());
        };

        let phase = match session.phase() {
            Phase::Settled => Phase::Settled,
            _ => action(session, &self.rules)?,
        };
        if phase != Phase::Settled {
            return Ok(BlackjackReport::InPlay {
                table: session.table_view(),
                wager: session.wager(),
            });
        }

        let result = self.finish(user, session)?;
        *hand = None;
        Ok(BlackjackReport::Settled(result))
    }

    /// Credit a settled hand's payout.
    fn finish(&self, user: &UserId, session: &BlackjackSession) -> Result<GameResult> {
        let outcome = session.outcome().ok_or(GameError::NoActiveHand)?;
        let stake = session.wager();
        let payout = outcome.payout(stake);
        let balance = if payout > Decimal::ZERO {
            self.ledger
                .credit(user, payout, GameType::Blackjack, outcome.detail.as_str())?
        } else {
            self.ledger.get_balance(user)?
        };

        info!(
            user_id = %user,
            game = %GameType::Blackjack,
            stake = %stake,
            payout = %payout,
            balance = %balance,
            "Blackjack hand settled"
        );

        Ok(GameResult {
            game: GameType::Blackjack,
            stake,
            outcome,
            payout,
            balance,
        })
    }
}
