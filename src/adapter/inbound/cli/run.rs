//! Handler for the `run` command.

use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::format_amount;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_services, Services};
use crate::infrastructure::config::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config.config)?;
    if let Some(database) = &args.database {
        config.database = database.to_string_lossy().to_string();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".to_string();
    }
    config.init_logging();

    if !output::is_quiet() {
        print_startup_config(&config);
    }

    let services = build_services(config)?;
    info!("casinobot starting");
    serve(services).await
}

#[cfg(feature = "telegram")]
async fn serve(services: Services) -> Result<()> {
    crate::adapter::inbound::telegram::bot::run_bot(services).await
}

#[cfg(not(feature = "telegram"))]
async fn serve(_services: Services) -> Result<()> {
    Err(crate::error::ConfigError::Other(
        "casinobot was built without the `telegram` feature".to_string(),
    )
    .into())
}

fn print_startup_config(config: &Config) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Database", &config.database);
    output::field(
        "Starting",
        format_amount(config.ledger.starting_balance),
    );
    output::field("Admins", config.telegram.admin_ids.len());

    let mut priced = Vec::new();
    for (game, price) in &config.games.prices {
        priced.push(format!("{game} {}", format_amount(*price)));
    }
    if priced.is_empty() {
        output::warning("No game has a price; every game is disabled");
    } else {
        output::field("Games", priced.join(", "));
    }
}
