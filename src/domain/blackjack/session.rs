//! Blackjack hand state machine.
//!
//! A session walks `Dealing -> PlayerTurn -> DealerTurn -> Settled`. The
//! wager is fixed when the session is created and is held until the hand
//! settles; the settlement carries the multiplier to credit back.

use std::fmt;

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::card::{Card, Deck};
use super::hand::{describe, hand_value, is_blackjack, is_bust};
use crate::domain::error::DomainError;
use crate::domain::money::Amount;
use crate::domain::outcome::Outcome;

/// Payout rules for blackjack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackjackRules {
    /// Multiplier for a natural blackjack (stake included).
    pub blackjack_multiplier: Decimal,
    /// Multiplier for a regular win (stake included).
    pub win_multiplier: Decimal,
    /// Multiplier for a push, normally a refund.
    pub push_multiplier: Decimal,
    /// Dealer draws on soft 17 instead of standing.
    pub dealer_hits_soft_17: bool,
}

impl Default for BlackjackRules {
    fn default() -> Self {
        Self {
            blackjack_multiplier: dec!(2.5),
            win_multiplier: dec!(2),
            push_multiplier: dec!(1),
            dealer_hits_soft_17: false,
        }
    }
}

impl BlackjackRules {
    /// Validate payout multipliers.
    ///
    /// # Errors
    /// Returns an error if any multiplier is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (entry, multiplier) in [
            ("blackjack_multiplier", self.blackjack_multiplier),
            ("win_multiplier", self.win_multiplier),
            ("push_multiplier", self.push_multiplier),
        ] {
            if multiplier < Decimal::ZERO {
                return Err(DomainError::NegativeMultiplier {
                    table: "blackjack",
                    entry: entry.to_string(),
                    multiplier,
                });
            }
        }
        Ok(())
    }

    fn multiplier(&self, verdict: Verdict) -> Decimal {
        match verdict {
            Verdict::Blackjack => self.blackjack_multiplier,
            Verdict::PlayerWin | Verdict::DealerBust => self.win_multiplier,
            Verdict::Push => self.push_multiplier,
            Verdict::PlayerBust | Verdict::DealerWin | Verdict::DealerBlackjack => Decimal::ZERO,
        }
    }
}

/// Stage of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

impl Phase {
    const fn name(self) -> &'static str {
        match self {
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "waiting for the player",
            Phase::DealerTurn => "with the dealer",
            Phase::Settled => "settled",
        }
    }
}

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Blackjack,
    PlayerWin,
    DealerBust,
    Push,
    PlayerBust,
    DealerWin,
    DealerBlackjack,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Blackjack => "blackjack",
            Verdict::PlayerWin => "player wins",
            Verdict::DealerBust => "dealer busts",
            Verdict::Push => "push",
            Verdict::PlayerBust => "player busts",
            Verdict::DealerWin => "dealer wins",
            Verdict::DealerBlackjack => "dealer blackjack",
        };
        f.write_str(text)
    }
}

/// Final result of a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub verdict: Verdict,
    pub multiplier: Decimal,
    pub player_total: u8,
    pub dealer_total: u8,
}

/// One player's hand against the dealer.
#[derive(Debug, Clone)]
pub struct BlackjackSession {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
    wager: Amount,
    phase: Phase,
    settlement: Option<Settlement>,
}

impl BlackjackSession {
    /// Open a hand with a freshly shuffled deck.
    pub fn new<R: Rng + ?Sized>(wager: Amount, rng: &mut R) -> Self {
        Self::with_deck(wager, Deck::shuffled(rng))
    }

    /// Open a hand with a given deck.
    #[must_use]
    pub fn with_deck(wager: Amount, deck: Deck) -> Self {
        Self {
            deck,
            player: Vec::new(),
            dealer: Vec::new(),
            wager,
            phase: Phase::Dealing,
            settlement: None,
        }
    }

    /// Deal two cards each. Naturals settle immediately.
    ///
    /// # Errors
    /// Returns an error if the hand was already dealt or the deck runs out.
    pub fn deal(&mut self, rules: &BlackjackRules) -> Result<Phase, DomainError> {
        self.expect_phase(Phase::Dealing, "deal")?;
        for _ in 0..2 {
            let card = self.draw()?;
            self.player.push(card);
            let card = self.draw()?;
            self.dealer.push(card);
        }

        let player_natural = is_blackjack(&self.player);
        let dealer_natural = is_blackjack(&self.dealer);
        match (player_natural, dealer_natural) {
            (true, true) => self.settle(Verdict::Push, rules),
            (true, false) => self.settle(Verdict::Blackjack, rules),
            (false, true) => self.settle(Verdict::DealerBlackjack, rules),
            (false, false) => self.phase = Phase::PlayerTurn,
        }
        Ok(self.phase)
    }

    /// Draw a card for the player. Busting settles; reaching 21 stands.
    ///
    /// # Errors
    /// Returns an error outside the player's turn or if the deck runs out.
    pub fn hit(&mut self, rules: &BlackjackRules) -> Result<Phase, DomainError> {
        self.expect_phase(Phase::PlayerTurn, "hit")?;
        let card = self.draw()?;
        self.player.push(card);

        if is_bust(&self.player) {
            self.settle(Verdict::PlayerBust, rules);
        } else if hand_value(&self.player).0 == 21 {
            self.play_dealer(rules)?;
        }
        Ok(self.phase)
    }

    /// End the player's turn and let the dealer play out.
    ///
    /// # Errors
    /// Returns an error outside the player's turn or if the deck runs out.
    pub fn stand(&mut self, rules: &BlackjackRules) -> Result<Phase, DomainError> {
        self.expect_phase(Phase::PlayerTurn, "stand")?;
        self.play_dealer(rules)?;
        Ok(self.phase)
    }

    fn play_dealer(&mut self, rules: &BlackjackRules) -> Result<(), DomainError> {
        self.phase = Phase::DealerTurn;
        loop {
            let (value, soft) = hand_value(&self.dealer);
            let stands = value > 17 || (value == 17 && !(soft && rules.dealer_hits_soft_17));
            if stands {
                break;
            }
            let card = self.draw()?;
            self.dealer.push(card);
        }

        let player = hand_value(&self.player).0;
        let dealer = hand_value(&self.dealer).0;
        let verdict = if dealer > 21 {
            Verdict::DealerBust
        } else if player > dealer {
            Verdict::PlayerWin
        } else if player == dealer {
            Verdict::Push
        } else {
            Verdict::DealerWin
        };
        self.settle(verdict, rules);
        Ok(())
    }

    fn settle(&mut self, verdict: Verdict, rules: &BlackjackRules) {
        self.settlement = Some(Settlement {
            verdict,
            multiplier: rules.multiplier(verdict),
            player_total: hand_value(&self.player).0,
            dealer_total: hand_value(&self.dealer).0,
        });
        self.phase = Phase::Settled;
    }

    fn draw(&mut self) -> Result<Card, DomainError> {
        self.deck.draw().ok_or(DomainError::DeckExhausted)
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::InvalidPhase {
                action,
                phase: self.phase.name(),
            })
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn wager(&self) -> Amount {
        self.wager
    }

    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        &self.player
    }

    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer
    }

    #[must_use]
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Table view for the player. The dealer's hole card stays hidden until
    /// the hand is settled.
    #[must_use]
    pub fn table_view(&self) -> String {
        let dealer = if self.phase == Phase::Settled {
            describe(&self.dealer)
        } else {
            match self.dealer.first() {
                Some(up) => format!("{up} ??"),
                None => "-".to_string(),
            }
        };
        let player = if self.player.is_empty() {
            "-".to_string()
        } else {
            describe(&self.player)
        };
        format!("Dealer: {dealer}\nYou:    {player}")
    }

    /// Outcome of a settled hand.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.settlement.map(|s| {
            let headline = match s.verdict {
                Verdict::Blackjack => "Blackjack!",
                Verdict::PlayerWin => "You beat the dealer!",
                Verdict::DealerBust => "The dealer busts!",
                Verdict::Push => "Push - your wager is returned.",
                Verdict::PlayerBust => "Bust!",
                Verdict::DealerWin => "The dealer wins.",
                Verdict::DealerBlackjack => "The dealer has blackjack.",
            };
            Outcome::new(
                s.multiplier,
                format!("{}\n{headline}", self.table_view()),
                format!("{} ({} vs {})", s.verdict, s.player_total, s.dealer_total),
            )
        })
    }
}
