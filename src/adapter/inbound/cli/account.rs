//! Handlers for the `account` commands.
//!
//! These run against the same SQLite database as the bot, so an operator can
//! credit a confirmed deposit while the bot is serving players.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{AccountArgs, CreditArgs, HistoryArgs};
use crate::adapter::inbound::cli::output;
use crate::application::ledger::Ledger;
use crate::domain::{format_amount, format_delta, LedgerEntry, UserId};
use crate::error::Result;
use crate::infrastructure::bootstrap::open_store;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Game")]
    game: String,
    #[tabled(rename = "Delta")]
    delta: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl From<&LedgerEntry> for EntryRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            time: entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: entry.kind.to_string(),
            game: entry.game.map_or_else(|| "-".to_string(), |g| g.to_string()),
            delta: format_delta(entry.delta),
            detail: entry.detail.clone(),
        }
    }
}

fn open_ledger(config_path: &Path) -> Result<(Config, Ledger)> {
    let config = Config::load(config_path)?;
    let store = open_store(&config)?;
    let ledger = Ledger::new(store, config.ledger.starting_balance);
    Ok((config, ledger))
}

/// Show a player's balance.
pub fn balance(args: &AccountArgs) -> Result<()> {
    let (_, ledger) = open_ledger(&args.config.config)?;
    let user = UserId::from(args.user.as_str());
    let balance = ledger.get_balance(&user)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "account.balance",
            "user": user,
            "balance": balance,
        }));
        return Ok(());
    }

    output::field("User", &user);
    output::field("Balance", output::highlight(format_amount(balance)));
    Ok(())
}

/// Credit a confirmed deposit. Negative amounts are rejected by the ledger.
pub fn credit(args: &CreditArgs) -> Result<()> {
    let (_, ledger) = open_ledger(&args.account.config.config)?;
    let user = UserId::from(args.account.user.as_str());
    let balance = ledger.top_up(&user, args.amount, args.reference.as_str())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "account.credit",
            "user": user,
            "amount": args.amount,
            "balance": balance,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Credited {} to {user}",
        output::positive(format_amount(args.amount))
    ));
    output::field("Balance", format_amount(balance));
    Ok(())
}

/// Show recent ledger entries, newest first.
pub fn history(args: &HistoryArgs) -> Result<()> {
    let (config, ledger) = open_ledger(&args.account.config.config)?;
    let user = UserId::from(args.account.user.as_str());
    let limit = args.limit.unwrap_or(config.ledger.history_limit);
    let entries = ledger.history(&user, limit)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "account.history",
            "user": user,
            "entries": entries,
        }));
        return Ok(());
    }

    output::section(&format!("History for {user}"));
    if entries.is_empty() {
        output::hint("no ledger entries yet");
        return Ok(());
    }
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
