//! Reply text for command results.

use rust_decimal::Decimal;
use tracing::error;

use crate::application::blackjack::BlackjackReport;
use crate::application::catalog::GameCatalog;
use crate::application::orchestrator::PlayReport;
use crate::domain::{
    format_amount, format_delta, Amount, GameResult, GameType, LedgerEntry, PlayerStats, UserId,
};
use crate::error::Error;
use crate::infrastructure::config::ledger::TopUpConfig;

pub(super) fn error_text(err: &Error) -> String {
    if err.is_user_facing() {
        return format!("❌ {err}");
    }
    error!(error = %err, "Command failed");
    "❌ Something went wrong. Please try again later.".to_string()
}

pub(super) fn balance_text(balance: Amount) -> String {
    format!("💰 Your balance: {}", format_amount(balance))
}

fn banner(game: GameType) -> String {
    let emoji = game.emoji();
    format!("{emoji} {} {emoji}", game.as_str().to_uppercase())
}

fn loss_line(game: GameType) -> &'static str {
    match game {
        GameType::Slots => "😔 No win this time!",
        GameType::Dice => "😔 Wrong guess! Better luck next time!",
        GameType::Darts | GameType::Blackjack => "😔 Better luck next time!",
    }
}

fn result_text(result: &GameResult) -> String {
    let verdict = if result.net() > Decimal::ZERO {
        format!("🎉 YOU WON {}!", format_amount(result.payout))
    } else if result.is_win() {
        format!("🤝 {} returned.", format_amount(result.payout))
    } else {
        loss_line(result.game).to_string()
    };
    format!(
        "{}\n\n{}\n\n{verdict}\n\n💰 Balance: {}",
        banner(result.game),
        result.outcome.narrative,
        format_amount(result.balance)
    )
}

pub(super) fn play_text(game: GameType, report: &PlayReport) -> String {
    match report {
        PlayReport::Played(result) => result_text(result),
        PlayReport::InsufficientFunds { balance, cost } => format!(
            "❌ Insufficient balance for {game}!\n\
            Cost: {}\n\
            Your balance: {}\n\n\
            Use /topup to add funds.",
            format_amount(*cost),
            format_amount(*balance)
        ),
        PlayReport::Blackjack(report) => blackjack_text(report),
    }
}

fn blackjack_text(report: &BlackjackReport) -> String {
    match report {
        BlackjackReport::Info { price, rules, table } => {
            let dealer = if rules.dealer_hits_soft_17 {
                "hits"
            } else {
                "stands"
            };
            let mut text = format!(
                "{}\n\n\
                Beat the dealer without going over 21.\n\
                Cost: {} per hand\n\
                Blackjack pays {}x, wins pay {}x, pushes pay {}x.\n\
                Dealer {dealer} on soft 17.",
                banner(GameType::Blackjack),
                format_amount(*price),
                rules.blackjack_multiplier.normalize(),
                rules.win_multiplier.normalize(),
                rules.push_multiplier.normalize(),
            );
            match table {
                Some(table) => {
                    text.push_str(&format!("\n\nYour open hand:\n{table}\n\n/hit or /stand?"));
                }
                None => text.push_str("\n\nUse /blackjack deal to start a hand."),
            }
            text
        }
        BlackjackReport::InPlay { table, wager } => format!(
            "{}\n\n{table}\n\nWager: {}\n/hit or /stand?",
            banner(GameType::Blackjack),
            format_amount(*wager)
        ),
        BlackjackReport::Settled(result) => result_text(result),
    }
}

pub(super) fn games_text(catalog: &GameCatalog, balance: Amount) -> String {
    let mut text = String::from("🎮 Games\n");
    for game in GameType::ALL {
        let command = match game {
            GameType::Dice => "/dice <1-6>",
            GameType::Blackjack => "/blackjack",
            GameType::Darts => "/darts",
            GameType::Slots => "/slots",
        };
        let price = catalog
            .prices
            .price(game)
            .map_or_else(|| "unavailable".to_string(), format_amount);
        text.push_str(&format!("\n{} {command} - {price}", game.emoji()));
    }
    text.push_str(&format!("\n\n💰 Balance: {}", format_amount(balance)));
    text
}

pub(super) fn history_text(entries: &[LedgerEntry]) -> String {
    if entries.is_empty() {
        return "📜 No activity yet. Try /games.".to_string();
    }

    let mut text = String::from("📜 Recent activity\n");
    for entry in entries {
        let label = entry
            .game
            .map_or_else(|| entry.kind.to_string(), |game| format!("{} {game}", entry.kind));
        text.push_str(&format!(
            "\n{} {label} {} ({})",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            format_delta(entry.delta),
            entry.detail
        ));
    }
    text
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).round_dp(1)
}

pub(super) fn stats_text(stats: &PlayerStats) -> String {
    if stats.total.plays == 0 {
        return format!(
            "📈 No games played yet.\nTopped up: {}",
            format_amount(stats.topped_up)
        );
    }

    let mut text = format!(
        "📈 Your statistics\n\n\
        Games played: {}\n\
        Wins: {} ({}%)\n\
        Wagered: {}\n\
        Won: {}\n\
        Net: {}\n\
        Topped up: {}\n",
        stats.total.plays,
        stats.total.wins,
        percent(stats.total.win_rate()),
        format_amount(stats.total.wagered),
        format_amount(stats.total.won),
        format_delta(stats.total.net()),
        format_amount(stats.topped_up),
    );
    for (game, per_game) in &stats.per_game {
        text.push_str(&format!(
            "\n{} {game}: {} played, {} won, net {}",
            game.emoji(),
            per_game.plays,
            per_game.wins,
            format_delta(per_game.net())
        ));
    }
    text
}

pub(super) fn topup_text(config: &TopUpConfig, user: &UserId) -> String {
    let mut text = format!("💳 Top up with {}\n\n", config.currency);
    match &config.address {
        Some(address) => text.push_str(&format!(
            "Send at least {} {} to:\n{address}\n\n\
            Include your user id {user} so an admin can credit your balance.",
            config.min_amount, config.currency
        )),
        None => text.push_str(&format!(
            "Contact an admin to add funds.\nYour user id: {user}"
        )),
    }
    if let Some(note) = &config.note {
        text.push_str(&format!("\n\n{note}"));
    }
    text
}
