//! Command-line interface definitions.
//!
//! Defines the CLI structure for the casinobot application using `clap`:
//! running the bot, checking configuration and house edge, and operating
//! on player accounts.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Telegram casino bot with virtual balances
#[derive(Parser, Debug)]
#[command(name = "casinobot")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the casinobot CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Inspect and credit player accounts
    #[command(subcommand)]
    Account(AccountCommand),
}

/// Subcommands for `casinobot check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and report each game's house edge.
    Config(ConfigPathArg),
}

/// Subcommands for `casinobot account`.
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Show a player's balance.
    Balance(AccountArgs),
    /// Credit a confirmed deposit to a player.
    Credit(CreditArgs),
    /// Show a player's recent ledger entries.
    History(HistoryArgs),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Override the SQLite database path from the config file.
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments identifying one player account.
#[derive(Args, Debug)]
pub struct AccountArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Player id as used by the chat platform.
    pub user: String,
}

/// Arguments for `account credit`.
#[derive(Args, Debug)]
pub struct CreditArgs {
    #[command(flatten)]
    pub account: AccountArgs,

    /// Amount to credit.
    pub amount: Decimal,

    /// Deposit reference recorded in the ledger (e.g. a transaction hash).
    #[arg(long, default_value = "cli credit")]
    pub reference: String,
}

/// Arguments for `account history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub account: AccountArgs,

    /// Number of entries to show (defaults to `ledger.history_limit`).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
