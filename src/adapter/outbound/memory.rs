//! In-memory account store for tests and dry runs.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::ledger::apply_postings;
use crate::domain::{Amount, LedgerEntry, Posting, UserId};
use crate::error::{LedgerError, Result};
use crate::port::outbound::store::AccountStore;

#[derive(Debug, Default)]
struct Book {
    balance: Amount,
    entries: Vec<LedgerEntry>,
}

/// In-memory store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    books: RwLock<HashMap<UserId, Book>>,
}

impl MemoryAccountStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryAccountStore {
    fn open_account(&self, user: &UserId, starting: Amount) -> Result<Amount> {
        let mut books = self.books.write();
        let book = books.entry(user.clone()).or_insert_with(|| Book {
            balance: starting,
            entries: Vec::new(),
        });
        Ok(book.balance)
    }

    fn balance(&self, user: &UserId) -> Result<Option<Amount>> {
        Ok(self.books.read().get(user).map(|book| book.balance))
    }

    fn apply(&self, user: &UserId, postings: &[Posting]) -> Result<Amount> {
        let mut books = self.books.write();
        let book = books.entry(user.clone()).or_default();
        let balance = apply_postings(book.balance, postings).map_err(|balance| {
            LedgerError::InsufficientFunds {
                required: postings
                    .iter()
                    .filter(|p| p.delta.is_sign_negative())
                    .map(|p| -p.delta)
                    .sum(),
                balance,
            }
        })?;

        let now = Utc::now();
        book.entries
            .extend(postings.iter().map(|p| LedgerEntry::committed(user, p, now)));
        book.balance = balance;
        Ok(balance)
    }

    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .books
            .read()
            .get(user)
            .map(|book| book.entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn entries(&self, user: &UserId) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .books
            .read()
            .get(user)
            .map(|book| book.entries.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameType;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn open_account_keeps_existing_balance() {
        let store = MemoryAccountStore::new();
        let user = UserId::from("1");
        assert_eq!(store.open_account(&user, dec!(5.00)).unwrap(), dec!(5.00));
        store
            .apply(&user, &[Posting::top_up(dec!(1.00), "tx")])
            .unwrap();
        assert_eq!(store.open_account(&user, dec!(5.00)).unwrap(), dec!(6.00));
    }

    #[test]
    fn rejected_apply_writes_nothing() {
        let store = MemoryAccountStore::new();
        let user = UserId::from("1");
        store.open_account(&user, dec!(0.50)).unwrap();

        let err = store
            .apply(&user, &[Posting::stake(GameType::Darts, dec!(1.00), "darts")])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Ledger(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(store.balance(&user).unwrap(), Some(dec!(0.50)));
        assert!(store.entries(&user).unwrap().is_empty());
    }

    #[test]
    fn history_is_newest_first() {
        let store = MemoryAccountStore::new();
        let user = UserId::from("1");
        store
            .apply(
                &user,
                &[
                    Posting::top_up(dec!(3.00), "first"),
                    Posting::top_up(dec!(4.00), "second"),
                ],
            )
            .unwrap();

        let history = store.history(&user, 1).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].detail, "second");
    }
}
