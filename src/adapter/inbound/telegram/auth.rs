//! Authorization for Telegram command handling.

use tracing::warn;

use super::command::{command_help, parse_command, CommandParseError, TelegramCommand};
use super::control::TelegramControl;

/// Process a message and return a response if it's a command.
///
/// Returns `None` for messages that are not commands (don't start with `/`).
///
/// Returns `Some(response)` for:
/// - Valid commands, with admin commands refused for non-admins
/// - Unknown commands (with the command list)
/// - Malformed commands (with error message and help)
pub fn command_response_for_message(
    text: &str,
    caller: u64,
    control: &TelegramControl,
) -> Option<String> {
    match parse_command(text) {
        Ok(command) if !is_authorized(&command, caller, control) => {
            Some("⛔ That command is for admins only.".to_string())
        }
        Ok(command) => Some(control.execute(caller, command)),
        Err(CommandParseError::NotACommand) => None,
        Err(CommandParseError::UnknownCommand(_)) => {
            Some(format!("❓ Unknown command!\n\n{}", command_help()))
        }
        Err(err) => Some(format!("❌ Invalid command: {err}\n\n{}", command_help())),
    }
}

/// Check if `caller` may run `command`.
fn is_authorized(command: &TelegramCommand, caller: u64, control: &TelegramControl) -> bool {
    if !matches!(command, TelegramCommand::Credit { .. }) || control.is_admin(caller) {
        return true;
    }

    warn!(user_id = caller, "Ignoring admin command from non-admin user");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryAccountStore;
    use crate::domain::UserId;
    use crate::infrastructure::bootstrap::{build_services_with_store, Services};
    use crate::infrastructure::config::Config;
    use std::sync::Arc;

    const ADMIN: u64 = 12345;

    fn control() -> TelegramControl {
        TelegramControl::new(services())
    }

    fn services() -> Services {
        let config = Config::parse_toml(
            r#"
[telegram]
admin_ids = [12345]

[games.prices]
darts = 1.00
"#,
        )
        .unwrap();
        build_services_with_store(config, Arc::new(MemoryAccountStore::new())).unwrap()
    }

    // -------------------------------------------------------------------------
    // Admin gating
    // -------------------------------------------------------------------------

    #[test]
    fn test_credit_allowed_for_admin() {
        let control = control();
        let response = command_response_for_message("/credit 7 1.00", ADMIN, &control).unwrap();
        assert!(response.contains("Credited"));
    }

    #[test]
    fn test_credit_refused_for_player() {
        let control = control();
        let response = command_response_for_message("/credit 7 1.00", 7, &control).unwrap();
        assert!(response.contains("admins only"));

        let balance = command_response_for_message("/balance", 7, &control).unwrap();
        assert!(balance.contains("$0.00"));
    }

    #[test]
    fn test_player_commands_need_no_admin() {
        let control = control();
        assert!(command_response_for_message("/balance", 7, &control).is_some());
        assert!(command_response_for_message("/games", 7, &control).is_some());
        assert!(command_response_for_message("/help", 7, &control).is_some());
    }

    // -------------------------------------------------------------------------
    // Command parsing error handling
    // -------------------------------------------------------------------------

    #[test]
    fn test_unknown_command_lists_commands() {
        let control = control();
        let response = command_response_for_message("/roulette", 7, &control).unwrap();
        assert!(response.contains("Unknown command"));
        assert!(response.contains("/darts"));
    }

    #[test]
    fn test_malformed_credit_shows_error_and_help() {
        let control = control();
        let response = command_response_for_message("/credit 7 lots", ADMIN, &control).unwrap();
        assert!(response.contains("Invalid command"));
        assert!(response.contains("invalid amount"));
        assert!(response.contains("Commands"));
    }

    #[test]
    fn test_non_command_text_is_ignored() {
        let control = control();
        assert!(command_response_for_message("hello", 7, &control).is_none());
        assert!(command_response_for_message("", 7, &control).is_none());
        assert!(command_response_for_message("   ", 7, &control).is_none());
    }

    #[test]
    fn test_unpriced_game_failure_is_hidden() {
        let services = services();
        let ledger = Arc::clone(&services.ledger);
        let control = TelegramControl::new(services);

        let response = command_response_for_message("/slots", 7, &control).unwrap();
        assert_eq!(response, "❌ Something went wrong. Please try again later.");
        assert!(!response.contains("slots"));
        assert!(ledger.history(&UserId::from(7u64), 10).unwrap().is_empty());
    }
}
