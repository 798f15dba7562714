//! Configuration check command handlers.

pub mod config;
