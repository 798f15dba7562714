//! Telegram long-polling loop.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::infrastructure::bootstrap::Services;
use crate::infrastructure::config::telegram::bot_token;

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;

/// Serve chat commands until the process is stopped.
///
/// # Errors
/// Returns an error if `TELEGRAM_BOT_TOKEN` is not set.
pub async fn run_bot(services: Services) -> Result<()> {
    let bot = Bot::new(bot_token()?);
    let control = TelegramControl::new(services);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let (Some(text), Some(caller)) = (msg.text(), msg.from.as_ref()) else {
                return respond(());
            };
            let text = text.to_string();
            let caller = caller.id.0;

            // Ledger calls hit SQLite synchronously.
            let response = tokio::task::spawn_blocking(move || {
                command_response_for_message(&text, caller, &control)
            })
            .await;

            match response {
                Ok(Some(response)) => {
                    if let Err(e) = bot.send_message(msg.chat.id, response).await {
                        error!(error = %e, "Failed to send Telegram command response");
                    }
                }
                Ok(None) => {}
                Err(e) => error!(error = %e, "Command handler panicked"),
            }

            respond(())
        }
    })
    .await;

    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
