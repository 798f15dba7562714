//! Database model types for Diesel ORM.
//!
//! Amounts are stored as decimal strings so no precision is lost.

use diesel::prelude::*;

use super::schema::{accounts, ledger_entries};

/// Database row for an account.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    pub user_id: String,
    pub balance: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database row for a ledger entry (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ledger_entries)]
pub struct NewEntryRow {
    pub user_id: String,
    pub kind: String,
    pub game: Option<String>,
    pub delta: String,
    pub detail: String,
    pub created_at: String,
}

/// Database row for a ledger entry (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = ledger_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryRow {
    pub id: i32,
    pub user_id: String,
    pub kind: String,
    pub game: Option<String>,
    pub delta: String,
    pub detail: String,
    pub created_at: String,
}
