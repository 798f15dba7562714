//! Telegram command router.
//!
//! Parses chat commands, runs them against the casino services and renders
//! the replies. Only `bot` touches the Telegram API.

pub mod auth;
#[cfg(feature = "telegram")]
pub mod bot;
pub mod command;
pub mod control;
