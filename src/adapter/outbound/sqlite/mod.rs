//! SQLite persistence adapter for balances and ledger history.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, run_migrations, DbPool};
pub use store::SqliteAccountStore;
