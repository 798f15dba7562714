use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{format_amount, GameType, UserId};

use super::super::command::{command_help, TelegramCommand};
use super::render;
use super::{player, TelegramControl};

impl TelegramControl {
    /// Execute one parsed command for `caller` and return the reply text.
    ///
    /// `/credit` must already be authorized; see `auth`.
    #[must_use]
    pub fn execute(&self, caller: u64, command: TelegramCommand) -> String {
        let user = player(caller);
        match command {
            TelegramCommand::Start => self.start_text(&user),
            TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::Games => self.games_text(&user),
            TelegramCommand::Balance => self.balance_text(&user),
            TelegramCommand::TopUp => render::topup_text(&self.services.config.topup, &user),
            TelegramCommand::History => self.history_text(&user),
            TelegramCommand::Stats => self.stats_text(&user),
            TelegramCommand::Play { game, args } => self.play_text(&user, game, &args),
            TelegramCommand::Credit { user_id, amount } => {
                self.credit_text(caller, player(user_id), amount)
            }
        }
    }

    fn start_text(&self, user: &UserId) -> String {
        match self.services.ledger.get_balance(user) {
            Ok(balance) => format!(
                "🎰 Welcome to the casino!\n\n💰 Balance: {}\n\n{}",
                format_amount(balance),
                command_help()
            ),
            Err(err) => render::error_text(&err),
        }
    }

    fn balance_text(&self, user: &UserId) -> String {
        match self.services.ledger.get_balance(user) {
            Ok(balance) => render::balance_text(balance),
            Err(err) => render::error_text(&err),
        }
    }

    fn games_text(&self, user: &UserId) -> String {
        match self.services.ledger.get_balance(user) {
            Ok(balance) => render::games_text(self.services.orchestrator.catalog(), balance),
            Err(err) => render::error_text(&err),
        }
    }

    fn history_text(&self, user: &UserId) -> String {
        let limit = self.services.config.ledger.history_limit;
        match self.services.ledger.history(user, limit) {
            Ok(entries) => render::history_text(&entries),
            Err(err) => render::error_text(&err),
        }
    }

    fn stats_text(&self, user: &UserId) -> String {
        match self.services.ledger.stats(user) {
            Ok(stats) => render::stats_text(&stats),
            Err(err) => render::error_text(&err),
        }
    }

    fn play_text(&self, user: &UserId, game: GameType, args: &[String]) -> String {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match self.services.orchestrator.play(user, game.as_str(), &args) {
            Ok(report) => render::play_text(game, &report),
            Err(err) => render::error_text(&err),
        }
    }

    fn credit_text(&self, caller: u64, target: UserId, amount: Decimal) -> String {
        let reference = format!("admin credit by {caller}");
        match self.services.ledger.top_up(&target, amount, reference) {
            Ok(balance) => {
                info!(admin = caller, user_id = %target, amount = %amount, "Admin credit applied");
                format!(
                    "✅ Credited {} to {target}\nNew balance: {}",
                    format_amount(amount),
                    format_amount(balance)
                )
            }
            Err(err) => render::error_text(&err),
        }
    }
}
