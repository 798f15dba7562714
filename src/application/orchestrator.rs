//! Game orchestration.
//!
//! Turns one play command into ledger operations: price lookup, argument
//! validation, affordability check, then a single settled play. Blackjack is
//! routed to the interactive tables.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::blackjack::{BlackjackReport, BlackjackTables};
use crate::application::catalog::GameCatalog;
use crate::application::ledger::Ledger;
use crate::domain::blackjack::Deck;
use crate::domain::dice::DiceGuess;
use crate::domain::{Amount, GameResult, GameType, UserId};
use crate::error::{Error, GameError, LedgerError, Result};

/// Usage text for the dice command.
pub const DICE_USAGE: &str = "/dice <1-6>";
/// Usage text for the blackjack command.
pub const BLACKJACK_USAGE: &str = "/blackjack [deal|hit|stand]";

/// What a play command produced.
#[derive(Debug, Clone)]
pub enum PlayReport {
    /// A quick play settled.
    Played(GameResult),
    /// The balance does not cover the price; nothing changed.
    InsufficientFunds { balance: Amount, cost: Amount },
    /// A blackjack step.
    Blackjack(BlackjackReport),
}

enum BlackjackAction {
    Info,
    Deal,
    Hit,
    Stand,
}

enum QuickPlay {
    Darts,
    Slots,
    Dice(DiceGuess),
}

/// Validated arguments for one play.
enum PlayArgs {
    Quick(QuickPlay),
    Blackjack(BlackjackAction),
}

/// Runs plays against the ledger with an injected random source.
pub struct GameOrchestrator {
    ledger: Arc<Ledger>,
    catalog: Arc<GameCatalog>,
    tables: BlackjackTables,
    rng: Mutex<StdRng>,
}

impl GameOrchestrator {
    /// Create an orchestrator seeded from OS entropy.
    pub fn new(ledger: Arc<Ledger>, catalog: Arc<GameCatalog>) -> Self {
        Self::with_rng(ledger, catalog, StdRng::from_entropy())
    }

    /// Create an orchestrator with a fixed random source.
    pub fn with_rng(ledger: Arc<Ledger>, catalog: Arc<GameCatalog>, rng: StdRng) -> Self {
        let tables = BlackjackTables::new(Arc::clone(&ledger), catalog.blackjack);
        Self {
            ledger,
            catalog,
            tables,
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Play `game` for `user` with positional `args`.
    ///
    /// Argument errors are raised before the ledger is touched. A short
    /// balance is reported as [`PlayReport::InsufficientFunds`], never as an
    /// error.
    pub fn play(&self, user: &UserId, game: &str, args: &[&str]) -> Result<PlayReport> {
        let game: GameType = game
            .parse()
            .map_err(|_| GameError::UnknownGame(game.to_string()))?;
        let price = self.catalog.price(game)?;
        let args = parse_args(game, args)?;
        debug!(user_id = %user, game = %game, price = %price, "Play requested");

        let report = match args {
            PlayArgs::Quick(play) => self.quick_play(user, game, price, play),
            PlayArgs::Blackjack(action) => self.blackjack(user, price, action),
        };

        match report {
            Err(Error::Ledger(LedgerError::InsufficientFunds { required, balance })) => {
                Ok(PlayReport::InsufficientFunds {
                    balance,
                    cost: required,
                })
            }
            other => other,
        }
    }

    fn quick_play(
        &self,
        user: &UserId,
        game: GameType,
        price: Amount,
        play: QuickPlay,
    ) -> Result<PlayReport> {
        let balance = self.ledger.get_balance(user)?;
        if balance < price {
            return Ok(PlayReport::InsufficientFunds {
                balance,
                cost: price,
            });
        }

        let catalog = &self.catalog;
        let result = self.ledger.settle(user, game, price, || {
            let mut rng = self.rng.lock();
            match play {
                QuickPlay::Darts => catalog.darts.throw(&mut *rng),
                QuickPlay::Slots => catalog.slots.spin(&mut *rng),
                QuickPlay::Dice(guess) => catalog.dice.play(guess, &mut *rng),
            }
        })?;
        Ok(PlayReport::Played(result))
    }

    fn blackjack(&self, user: &UserId, price: Amount, action: BlackjackAction) -> Result<PlayReport> {
        let report = match action {
            BlackjackAction::Info => self.tables.info(user, price),
            BlackjackAction::Deal => {
                if self.tables.has_open_hand(user) {
                    return Err(GameError::HandInProgress.into());
                }
                let balance = self.ledger.get_balance(user)?;
                if balance < price {
                    return Ok(PlayReport::InsufficientFunds {
                        balance,
                        cost: price,
                    });
                }
                let deck = Deck::shuffled(&mut *self.rng.lock());
                self.tables.deal(user, price, deck)?
            }
            BlackjackAction::Hit => self.tables.hit(user)?,
            BlackjackAction::Stand => self.tables.stand(user)?,
        };
        Ok(PlayReport::Blackjack(report))
    }
}

fn parse_args(game: GameType, args: &[&str]) -> Result<PlayArgs> {
    match game {
        GameType::Darts => Ok(PlayArgs::Quick(QuickPlay::Darts)),
        GameType::Slots => Ok(PlayArgs::Quick(QuickPlay::Slots)),
        GameType::Dice => {
            let raw = args.first().ok_or_else(|| GameError::InvalidArgument {
                reason: "pick a number to bet on".to_string(),
                usage: DICE_USAGE,
            })?;
            let value: i64 = raw.parse().map_err(|_| GameError::InvalidArgument {
                reason: format!("`{raw}` is not a number"),
                usage: DICE_USAGE,
            })?;
            let guess = DiceGuess::new(value).map_err(|e| GameError::InvalidArgument {
                reason: e.to_string(),
                usage: DICE_USAGE,
            })?;
            Ok(PlayArgs::Quick(QuickPlay::Dice(guess)))
        }
        GameType::Blackjack => {
            let action = match args.first().map(|a| a.to_ascii_lowercase()).as_deref() {
                None | Some("info") => BlackjackAction::Info,
                Some("deal") => BlackjackAction::Deal,
                Some("hit") => BlackjackAction::Hit,
                Some("stand") => BlackjackAction::Stand,
                Some(other) => {
                    return Err(GameError::InvalidArgument {
                        reason: format!("unknown blackjack action `{other}`"),
                        usage: BLACKJACK_USAGE,
                    }
                    .into())
                }
            };
            Ok(PlayArgs::Blackjack(action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryAccountStore;
    use crate::application::catalog::tests::catalog;
    use crate::domain::dice::DiceRules;
    use rust_decimal_macros::dec;

    fn orchestrator(starting: Amount, seed: u64) -> GameOrchestrator {
        let ledger = Arc::new(Ledger::new(Arc::new(MemoryAccountStore::new()), starting));
        GameOrchestrator::with_rng(ledger, Arc::new(catalog()), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn unknown_game_is_rejected() {
        let orchestrator = orchestrator(dec!(5.00), 1);
        let err = orchestrator
            .play(&UserId::from("1"), "roulette", &[])
            .unwrap_err();
        assert!(matches!(err, Error::Game(GameError::UnknownGame(_))));
    }

    #[test]
    fn invalid_guess_leaves_the_ledger_untouched() {
        let orchestrator = orchestrator(dec!(5.00), 1);
        let user = UserId::from("1");

        let cases: [&[&str]; 4] = [&[], &["7"], &["0"], &["six"]];
        for args in cases {
            let err = orchestrator.play(&user, "dice", args).unwrap_err();
            assert!(matches!(
                err,
                Error::Game(GameError::InvalidArgument { usage: DICE_USAGE, .. })
            ));
        }
        assert!(orchestrator.ledger().history(&user, 10).unwrap().is_empty());
    }

    #[test]
    fn short_balance_is_a_report_not_an_error() {
        let orchestrator = orchestrator(dec!(0.50), 1);

        let report = orchestrator.play(&UserId::from("1"), "darts", &[]).unwrap();

        assert!(matches!(
            report,
            PlayReport::InsufficientFunds { balance, cost }
                if balance == dec!(0.50) && cost == dec!(1.00)
        ));
    }

    #[test]
    fn seeded_dice_pays_the_multiplier_on_a_hit() {
        let seed = 11;
        let roll = DiceRules::roll(&mut StdRng::seed_from_u64(seed));
        let orchestrator = orchestrator(dec!(5.00), seed);
        let user = UserId::from("1");

        let guess = roll.to_string();
        let report = orchestrator.play(&user, "dice", &[guess.as_str()]).unwrap();

        let PlayReport::Played(result) = report else {
            panic!("dice should settle");
        };
        assert!(result.is_win());
        assert_eq!(result.payout, dec!(2.00));
        assert_eq!(result.balance, dec!(6.00));
    }

    #[test]
    fn seeded_dice_miss_costs_exactly_the_stake() {
        let seed = 11;
        let roll = DiceRules::roll(&mut StdRng::seed_from_u64(seed));
        let wrong = if roll == 6 { 1 } else { roll + 1 }.to_string();
        let orchestrator = orchestrator(dec!(5.00), seed);

        let PlayReport::Played(result) = orchestrator
            .play(&UserId::from("1"), "dice", &[wrong.as_str()])
            .unwrap()
        else {
            panic!("dice should settle");
        };

        assert!(!result.is_win());
        assert_eq!(result.balance, dec!(4.00));
    }

    #[test]
    fn blackjack_without_arguments_is_info() {
        let orchestrator = orchestrator(dec!(5.00), 1);
        let report = orchestrator
            .play(&UserId::from("1"), "blackjack", &[])
            .unwrap();
        assert!(matches!(
            report,
            PlayReport::Blackjack(BlackjackReport::Info { table: None, .. })
        ));
    }

    #[test]
    fn unpriced_blackjack_fails_loudly() {
        let mut catalog = catalog();
        catalog.prices = [(GameType::Dice, dec!(1.00))].into_iter().collect();
        let ledger = Arc::new(Ledger::new(Arc::new(MemoryAccountStore::new()), dec!(5.00)));
        let orchestrator =
            GameOrchestrator::with_rng(ledger, Arc::new(catalog), StdRng::seed_from_u64(1));

        let err = orchestrator
            .play(&UserId::from("1"), "blackjack", &["deal"])
            .unwrap_err();
        assert!(matches!(err, Error::Game(GameError::UnknownGame(_))));
    }
}
