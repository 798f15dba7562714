//! Ledger integration tests over both stores.

mod harness;

use std::sync::{Arc, Barrier};
use std::thread;

use casinobot::adapter::outbound::memory::MemoryAccountStore;
use casinobot::application::Ledger;
use casinobot::domain::{EntryKind, GameType, Outcome, UserId};
use casinobot::error::{Error, LedgerError};
use casinobot::port::AccountStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use harness::temp_db::TempDb;

/// Two plays racing for a balance that covers exactly one.
fn race_for_last_stake(first: Arc<Ledger>, second: Arc<Ledger>) -> Vec<casinobot::error::Result<Decimal>> {
    let user = UserId::from("racer");
    first.top_up(&user, dec!(1.00), "seed").unwrap();

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = [first, second]
        .into_iter()
        .map(|ledger| {
            let barrier = Arc::clone(&barrier);
            let user = user.clone();
            thread::spawn(move || {
                barrier.wait();
                ledger
                    .settle(&user, GameType::Darts, dec!(1.00), || {
                        Outcome::new(Decimal::ZERO, "miss", "miss")
                    })
                    .map(|result| result.balance)
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

fn assert_exactly_one_wins(results: &[casinobot::error::Result<Decimal>]) {
    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let short = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(Error::Ledger(LedgerError::InsufficientFunds { .. }))
            )
        })
        .count();
    assert_eq!(succeeded, 1, "{results:?}");
    assert_eq!(short, 1, "{results:?}");
}

#[test]
fn concurrent_plays_on_memory_store_settle_once() {
    let ledger = Arc::new(Ledger::new(Arc::new(MemoryAccountStore::new()), Decimal::ZERO));
    let results = race_for_last_stake(Arc::clone(&ledger), Arc::clone(&ledger));
    assert_exactly_one_wins(&results);
    assert_eq!(ledger.get_balance(&UserId::from("racer")).unwrap(), Decimal::ZERO);
}

#[test]
fn concurrent_plays_on_sqlite_settle_once() {
    let db = TempDb::create();
    let ledger = Arc::new(Ledger::new(db.store(), Decimal::ZERO));
    let results = race_for_last_stake(Arc::clone(&ledger), Arc::clone(&ledger));
    assert_exactly_one_wins(&results);
    assert_eq!(ledger.get_balance(&UserId::from("racer")).unwrap(), Decimal::ZERO);
}

#[test]
fn separate_processes_cannot_overdraw_the_same_account() {
    let db = TempDb::create();
    let first = Arc::new(Ledger::new(db.store(), Decimal::ZERO));
    let second = Arc::new(Ledger::new(db.separate_store(), Decimal::ZERO));

    let results = race_for_last_stake(first, Arc::clone(&second));

    assert_exactly_one_wins(&results);
    assert_eq!(second.get_balance(&UserId::from("racer")).unwrap(), Decimal::ZERO);
}

#[test]
fn over_debit_leaves_balance_and_history_untouched() {
    let db = TempDb::create();
    let ledger = Ledger::new(db.store(), dec!(0.50));
    let user = UserId::from("short");

    let err = ledger.debit(&user, dec!(1.00), GameType::Slots).unwrap_err();

    assert!(matches!(
        err,
        Error::Ledger(LedgerError::InsufficientFunds { required, balance })
            if required == dec!(1.00) && balance == dec!(0.50)
    ));
    assert_eq!(ledger.get_balance(&user).unwrap(), dec!(0.50));
    assert!(ledger.history(&user, 10).unwrap().is_empty());
}

#[test]
fn balances_survive_reopening_the_database() {
    let db = TempDb::create();
    let user = UserId::from("persistent");
    {
        let ledger = Ledger::new(db.store(), dec!(5.00));
        ledger.debit(&user, dec!(1.00), GameType::Dice).unwrap();
        ledger.credit(&user, dec!(2.00), GameType::Dice, "guessed 4, rolled 4").unwrap();
    }

    let reopened = Ledger::new(db.separate_store(), Decimal::ZERO);
    assert_eq!(reopened.get_balance(&user).unwrap(), dec!(6.00));

    let history = reopened.history(&user, 10).unwrap();
    let kinds: Vec<_> = history.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [EntryKind::Winnings, EntryKind::Stake]);
}

#[test]
fn stats_aggregate_across_games() {
    let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
    let ledger = Ledger::new(store, dec!(10.00));
    let user = UserId::from("stats");

    ledger
        .settle(&user, GameType::Dice, dec!(1.00), || {
            Outcome::new(dec!(2), "hit", "guessed 2, rolled 2")
        })
        .unwrap();
    ledger
        .settle(&user, GameType::Darts, dec!(1.00), || {
            Outcome::new(Decimal::ZERO, "miss", "miss")
        })
        .unwrap();

    let stats = ledger.stats(&user).unwrap();
    assert_eq!(stats.total.plays, 2);
    assert_eq!(stats.total.wins, 1);
    assert_eq!(stats.total.net(), Decimal::ZERO);
    assert_eq!(stats.per_game[&GameType::Dice].won, dec!(2.00));
}
