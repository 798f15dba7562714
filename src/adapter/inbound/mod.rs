//! Inbound adapters (driving side): the chat router and the operator CLI.

pub mod cli;
pub mod telegram;
