//! Telegram command parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::GameType;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq)]
pub enum TelegramCommand {
    Start,
    Help,
    Games,
    Balance,
    TopUp,
    History,
    Stats,
    /// A game command with its raw positional arguments.
    Play {
        game: GameType,
        args: Vec<String>,
    },
    /// Admin: credit a confirmed deposit to a user.
    Credit {
        user_id: u64,
        amount: Decimal,
    },
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidUserId(String),
    InvalidDecimal(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
            Self::InvalidUserId(value) => write!(f, "invalid user id `{value}`"),
            Self::InvalidDecimal(value) => write!(f, "invalid amount `{value}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);
    let play = |game: GameType, args: Vec<String>| TelegramCommand::Play { game, args };

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/games" => Ok(TelegramCommand::Games),
        "/balance" => Ok(TelegramCommand::Balance),
        "/topup" => Ok(TelegramCommand::TopUp),
        "/history" => Ok(TelegramCommand::History),
        "/stats" => Ok(TelegramCommand::Stats),
        "/darts" => Ok(play(GameType::Darts, Vec::new())),
        "/slots" => Ok(play(GameType::Slots, Vec::new())),
        "/dice" => Ok(play(GameType::Dice, parts.map(str::to_string).collect())),
        "/blackjack" | "/bj" => Ok(play(
            GameType::Blackjack,
            parts.map(str::to_string).collect(),
        )),
        "/deal" => Ok(play(GameType::Blackjack, vec!["deal".to_string()])),
        "/hit" => Ok(play(GameType::Blackjack, vec!["hit".to_string()])),
        "/stand" => Ok(play(GameType::Blackjack, vec!["stand".to_string()])),
        "/credit" => {
            let raw_user = parts
                .next()
                .ok_or(CommandParseError::MissingArgument("user_id"))?;
            let raw_amount = parts
                .next()
                .ok_or(CommandParseError::MissingArgument("amount"))?;

            let user_id = raw_user
                .parse()
                .map_err(|_| CommandParseError::InvalidUserId(raw_user.to_string()))?;
            let amount = Decimal::from_str(raw_amount)
                .map_err(|_| CommandParseError::InvalidDecimal(raw_amount.to_string()))?;

            Ok(TelegramCommand::Credit { user_id, amount })
        }
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /balance - 💰 Check your balance\n\
    /topup - 💳 How to add funds\n\
    /games - 🎮 Games and prices\n\
    /history - 📜 Recent activity\n\
    /stats - 📈 Your statistics\n\n\
    Quick games:\n\
    /darts - 🎯 Throw a dart\n\
    /slots - 🎰 Spin the reels\n\
    /dice <1-6> - 🎲 Guess the roll\n\
    /blackjack [deal|hit|stand] - 🃏 Play a hand\n\
    /hit, /stand - 🃏 Shortcuts while a hand is open"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("balance", "Check your balance"),
        ("topup", "How to add funds"),
        ("games", "Games and prices"),
        ("darts", "Throw a dart"),
        ("slots", "Spin the reels"),
        ("dice", "Guess the roll: /dice 1-6"),
        ("blackjack", "Play a hand of blackjack"),
        ("hit", "Blackjack: draw a card"),
        ("stand", "Blackjack: stand"),
        ("history", "Recent activity"),
        ("stats", "Your statistics"),
        ("help", "Show all commands"),
    ]
}
