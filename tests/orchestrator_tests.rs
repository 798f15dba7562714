//! End-to-end plays through the orchestrator over SQLite.

mod harness;

use std::sync::Arc;

use casinobot::application::blackjack::BlackjackReport;
use casinobot::application::{GameOrchestrator, Ledger, PlayReport};
use casinobot::domain::dice::DiceRules;
use casinobot::domain::{EntryKind, UserId};
use casinobot::error::{Error, GameError};
use casinobot::infrastructure::bootstrap::build_services_with_store;
use casinobot::infrastructure::config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal_macros::dec;

use harness::config::priced_config;
use harness::temp_db::TempDb;

fn seeded(db: &TempDb, seed: u64) -> GameOrchestrator {
    let config = priced_config();
    let ledger = Arc::new(Ledger::new(db.store(), config.ledger.starting_balance));
    GameOrchestrator::with_rng(ledger, Arc::new(config.catalog().unwrap()), StdRng::seed_from_u64(seed))
}

#[test]
fn correct_dice_guess_turns_five_into_six() {
    let db = TempDb::create();
    let seed = 2024;
    let roll = DiceRules::roll(&mut StdRng::seed_from_u64(seed));
    let orchestrator = seeded(&db, seed);
    let user = UserId::from("dice-player");

    let guess = roll.to_string();
    let PlayReport::Played(result) = orchestrator.play(&user, "dice", &[guess.as_str()]).unwrap()
    else {
        panic!("dice should settle");
    };

    assert!(result.is_win());
    assert_eq!(result.stake, dec!(1.00));
    assert_eq!(result.payout, dec!(2.00));
    assert_eq!(result.balance, dec!(6.00));

    let history = orchestrator.ledger().history(&user, 10).unwrap();
    let deltas: Vec<_> = history.iter().map(|e| (e.kind, e.delta)).collect();
    assert_eq!(
        deltas,
        [(EntryKind::Winnings, dec!(2.00)), (EntryKind::Stake, dec!(-1.00))]
    );
}

#[test]
fn balance_never_goes_negative_over_many_plays() {
    let db = TempDb::create();
    let orchestrator = seeded(&db, 7);
    let user = UserId::from("grinder");

    let mut short = false;
    for _ in 0..50 {
        match orchestrator.play(&user, "slots", &[]).unwrap() {
            PlayReport::Played(result) => assert!(result.balance >= dec!(0)),
            PlayReport::InsufficientFunds { balance, cost } => {
                assert!(balance < cost);
                short = true;
                break;
            }
            PlayReport::Blackjack(_) => panic!("slots never routes to blackjack"),
        }
    }

    let balance = orchestrator.ledger().get_balance(&user).unwrap();
    assert!(balance >= dec!(0));
    if short {
        assert!(balance < dec!(1.00));
    }
}

#[test]
fn blackjack_hand_holds_the_wager_until_settled() {
    let db = TempDb::create();
    let orchestrator = seeded(&db, 99);
    let user = UserId::from("bj");

    match orchestrator.play(&user, "blackjack", &["deal"]).unwrap() {
        PlayReport::Blackjack(BlackjackReport::InPlay { wager, .. }) => {
            assert_eq!(wager, dec!(1.00));
            assert_eq!(orchestrator.ledger().get_balance(&user).unwrap(), dec!(4.00));

            let err = orchestrator.play(&user, "blackjack", &["deal"]).unwrap_err();
            assert!(matches!(err, Error::Game(GameError::HandInProgress)));

            let PlayReport::Blackjack(BlackjackReport::Settled(result)) =
                orchestrator.play(&user, "blackjack", &["stand"]).unwrap()
            else {
                panic!("stand settles the hand");
            };
            assert_eq!(result.balance, dec!(4.00) + result.payout);
        }
        PlayReport::Blackjack(BlackjackReport::Settled(result)) => {
            assert_eq!(result.balance, dec!(4.00) + result.payout);
        }
        other => panic!("unexpected report {other:?}"),
    }

    let err = orchestrator.play(&user, "blackjack", &["hit"]).unwrap_err();
    assert!(matches!(err, Error::Game(GameError::NoActiveHand)));
}

#[test]
fn unpriced_blackjack_is_an_unknown_game() {
    let config = Config::parse_toml("[games.prices]\ndarts = 1.00\n").unwrap();
    let db = TempDb::create();
    let services = build_services_with_store(config, db.store()).unwrap();

    let err = services
        .orchestrator
        .play(&UserId::from("1"), "blackjack", &["deal"])
        .unwrap_err();

    assert!(matches!(err, Error::Game(GameError::UnknownGame(ref game)) if game == "blackjack"));
}
