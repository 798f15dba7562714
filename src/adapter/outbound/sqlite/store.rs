//! SQLite account store implementation.
//!
//! Balances and history live in two tables; every balance change and its
//! entries commit in one `BEGIN IMMEDIATE` transaction.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{AccountRow, EntryRow, NewEntryRow};
use crate::adapter::outbound::sqlite::database::schema::{accounts, ledger_entries};
use crate::domain::ledger::apply_postings;
use crate::domain::{Amount, EntryKind, GameType, LedgerEntry, Posting, UserId};
use crate::error::{Error, LedgerError, PersistenceError, Result};
use crate::port::outbound::store::AccountStore;

/// SQLite-backed account store.
pub struct SqliteAccountStore {
    pool: DbPool,
}

impl SqliteAccountStore {
    /// Create a new SQLite account store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool
            .get()
            .map_err(|e| PersistenceError::Connection(e.to_string()).into())
    }

    fn load_balance(conn: &mut SqliteConnection, user: &UserId) -> Result<Option<Amount>> {
        let stored: Option<String> = accounts::table
            .find(user.as_str())
            .select(accounts::balance)
            .first(conn)
            .optional()?;
        stored.map(|raw| parse_amount(&raw)).transpose()
    }

    fn from_row(row: EntryRow) -> Result<LedgerEntry> {
        let kind = EntryKind::from_str(&row.kind).map_err(PersistenceError::Corrupt)?;
        let game = row
            .game
            .map(|g| GameType::from_str(&g).map_err(|e| PersistenceError::Corrupt(e.to_string())))
            .transpose()?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| PersistenceError::Corrupt(format!("entry {}: {e}", row.id)))?
            .with_timezone(&Utc);

        Ok(LedgerEntry {
            user_id: UserId::from(row.user_id),
            kind,
            game,
            delta: parse_amount(&row.delta)?,
            detail: row.detail,
            created_at,
        })
    }
}

fn parse_amount(raw: &str) -> Result<Amount> {
    Decimal::from_str(raw)
        .map_err(|e| PersistenceError::Corrupt(format!("amount `{raw}`: {e}")).into())
}

impl AccountStore for SqliteAccountStore {
    fn open_account(&self, user: &UserId, starting: Amount) -> Result<Amount> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            if let Some(balance) = Self::load_balance(conn, user)? {
                return Ok(balance);
            }
            let now = Utc::now().to_rfc3339();
            diesel::insert_into(accounts::table)
                .values(&AccountRow {
                    user_id: user.to_string(),
                    balance: starting.to_string(),
                    created_at: now.clone(),
                    updated_at: now,
                })
                .execute(conn)?;
            Ok(starting)
        })
    }

    fn balance(&self, user: &UserId) -> Result<Option<Amount>> {
        let mut conn = self.conn()?;
        Self::load_balance(&mut conn, user)
    }

    fn apply(&self, user: &UserId, postings: &[Posting]) -> Result<Amount> {
        let mut conn = self.conn()?;
        conn.immediate_transaction::<_, Error, _>(|conn| {
            let now = Utc::now().to_rfc3339();
            let current = match Self::load_balance(conn, user)? {
                Some(balance) => balance,
                None => {
                    diesel::insert_into(accounts::table)
                        .values(&AccountRow {
                            user_id: user.to_string(),
                            balance: Decimal::ZERO.to_string(),
                            created_at: now.clone(),
                            updated_at: now.clone(),
                        })
                        .execute(conn)?;
                    Decimal::ZERO
                }
            };

            let balance = apply_postings(current, postings).map_err(|balance| {
                LedgerError::InsufficientFunds {
                    required: postings
                        .iter()
                        .filter(|p| p.delta.is_sign_negative())
                        .map(|p| -p.delta)
                        .sum(),
                    balance,
                }
            })?;

            let rows: Vec<NewEntryRow> = postings
                .iter()
                .map(|p| NewEntryRow {
                    user_id: user.to_string(),
                    kind: p.kind.as_str().to_string(),
                    game: p.game.map(|g| g.as_str().to_string()),
                    delta: p.delta.to_string(),
                    detail: p.detail.clone(),
                    created_at: now.clone(),
                })
                .collect();
            diesel::insert_into(ledger_entries::table)
                .values(&rows)
                .execute(conn)?;

            diesel::update(accounts::table.find(user.as_str()))
                .set((
                    accounts::balance.eq(balance.to_string()),
                    accounts::updated_at.eq(&now),
                ))
                .execute(conn)?;

            Ok(balance)
        })
    }

    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<LedgerEntry>> {
        let mut conn = self.conn()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<EntryRow> = ledger_entries::table
            .filter(ledger_entries::user_id.eq(user.as_str()))
            .order(ledger_entries::id.desc())
            .limit(limit)
            .select(EntryRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(Self::from_row).collect()
    }

    fn entries(&self, user: &UserId) -> Result<Vec<LedgerEntry>> {
        let mut conn = self.conn()?;
        let rows: Vec<EntryRow> = ledger_entries::table
            .filter(ledger_entries::user_id.eq(user.as_str()))
            .order(ledger_entries::id.asc())
            .select(EntryRow::as_select())
            .load(&mut conn)?;
        rows.into_iter().map(Self::from_row).collect()
    }
}
