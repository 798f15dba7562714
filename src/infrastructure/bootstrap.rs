//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::store::SqliteAccountStore;
use crate::application::ledger::Ledger;
use crate::application::orchestrator::GameOrchestrator;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::AccountStore;

/// Everything a front end needs to serve commands.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<Config>,
    pub ledger: Arc<Ledger>,
    pub orchestrator: Arc<GameOrchestrator>,
}

/// Open the SQLite store at the configured path, applying migrations.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_store(config: &Config) -> Result<Arc<dyn AccountStore>> {
    let pool = create_pool(&config.database)?;
    run_migrations(&pool)?;
    info!(database = %config.database, "Database ready");
    Ok(Arc::new(SqliteAccountStore::new(pool)))
}

/// Wire the ledger and orchestrator over the configured SQLite store.
///
/// # Errors
/// Returns an error if the store cannot be opened or a game table is invalid.
pub fn build_services(config: Config) -> Result<Services> {
    let store = open_store(&config)?;
    build_services_with_store(config, store)
}

/// Wire the ledger and orchestrator over an existing store.
///
/// # Errors
/// Returns an error if a game table is invalid.
pub fn build_services_with_store(
    config: Config,
    store: Arc<dyn AccountStore>,
) -> Result<Services> {
    let catalog = Arc::new(config.catalog()?);
    for game in catalog.prices.unpriced() {
        warn!(game = %game, "No price configured; the game is disabled");
    }

    let ledger = Arc::new(Ledger::new(store, config.ledger.starting_balance));
    let orchestrator = Arc::new(GameOrchestrator::new(Arc::clone(&ledger), catalog));

    Ok(Services {
        config: Arc::new(config),
        ledger,
        orchestrator,
    })
}
