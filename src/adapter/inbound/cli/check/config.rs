use std::path::Path;

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::catalog::GameCatalog;
use crate::domain::{format_amount, GameType};
use crate::error::Result;
use crate::infrastructure::config::telegram::{bot_token, BOT_TOKEN_ENV};
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct GameRow {
    #[tabled(rename = "Game")]
    game: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "House Edge")]
    house_edge: String,
}

fn percent(value: Decimal) -> String {
    format!("{}%", (value * Decimal::ONE_HUNDRED).round_dp(2))
}

fn game_rows(catalog: &GameCatalog) -> Vec<GameRow> {
    GameType::ALL
        .into_iter()
        .map(|game| {
            let rtp = catalog.expected_return(game);
            GameRow {
                game: game.to_string(),
                price: catalog
                    .prices
                    .price(game)
                    .map_or_else(|| "unpriced".to_string(), format_amount),
                expected_return: rtp.map_or_else(|| "n/a".to_string(), percent),
                house_edge: rtp.map_or_else(|| "n/a".to_string(), |r| percent(Decimal::ONE - r)),
            }
        })
        .collect()
}

/// Validate the configuration file and report each game's house edge.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let catalog = config.catalog()?;
    let unpriced = catalog.prices.unpriced();
    let token_present = bot_token().is_ok();

    if output::is_json() {
        let games: Vec<_> = GameType::ALL
            .into_iter()
            .map(|game| {
                json!({
                    "game": game,
                    "price": catalog.prices.price(game),
                    "expected_return": catalog.expected_return(game),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "games": games,
            "unpriced": unpriced,
            "telegram_token_present": token_present,
            "admin_count": config.telegram.admin_ids.len(),
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Games");
    output::lines(&Table::new(game_rows(&catalog)).to_string());
    for game in &unpriced {
        output::warning(&format!("{game} has no price and cannot be played"));
    }

    output::section("Telegram");
    if token_present {
        output::success("Bot token found in environment");
    } else {
        output::warning(&format!("{BOT_TOKEN_ENV} is not set"));
    }
    if config.telegram.admin_ids.is_empty() {
        output::warning("No admin ids configured; /credit is disabled");
    } else {
        output::field("Admins", config.telegram.admin_ids.len());
    }

    output::section("Top-up");
    output::field("Currency", &config.topup.currency);
    match &config.topup.address {
        Some(address) => output::field("Address", address),
        None => output::hint("no deposit address; /topup will ask players to contact an admin"),
    }

    output::success("Configuration check complete");
    Ok(())
}
