use std::path::PathBuf;
use std::sync::Arc;

use casinobot::adapter::outbound::sqlite::{create_pool, run_migrations, DbPool, SqliteAccountStore};
use casinobot::port::AccountStore;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The file lives in a temporary directory removed on drop.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("casinobot.db");
        let pool = create_pool(&path.to_string_lossy()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    /// A store over the shared pool.
    pub fn store(&self) -> Arc<dyn AccountStore> {
        Arc::new(SqliteAccountStore::new(self.pool.clone()))
    }

    /// A store over its own pool, as a second process would open it.
    pub fn separate_store(&self) -> Arc<dyn AccountStore> {
        let pool = create_pool(&self.path()).expect("create second pool");
        Arc::new(SqliteAccountStore::new(pool))
    }
}
