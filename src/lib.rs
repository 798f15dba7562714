//! casinobot - a Telegram casino bot over a virtual-balance ledger.
//!
//! Players spend balance on darts, slots, dice and blackjack through chat
//! commands. Every play is priced from configuration, drawn from a fixed
//! probability table and settled against the ledger in one transaction.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Outcome tables, blackjack hands, ledger entries. No I/O.
//! - [`port`] - The [`port::AccountStore`] trait the ledger persists through
//! - [`application`] - [`application::Ledger`], blackjack tables and the
//!   [`application::GameOrchestrator`]
//! - [`adapter`] - SQLite and in-memory stores, the Telegram command router
//!   and the operator CLI
//! - [`infrastructure`] - Configuration loading and service wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Serve commands through the Telegram Bot API
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use casinobot::adapter::outbound::memory::MemoryAccountStore;
//! use casinobot::application::PlayReport;
//! use casinobot::domain::UserId;
//! use casinobot::infrastructure::bootstrap::build_services_with_store;
//! use casinobot::infrastructure::config::Config;
//!
//! fn main() -> casinobot::error::Result<()> {
//!     let config = Config::parse_toml("[games.prices]\ndice = 1.00\n")?;
//!     let services = build_services_with_store(config, Arc::new(MemoryAccountStore::new()))?;
//!
//!     let user = UserId::from(42_u64);
//!     services.ledger.top_up(&user, rust_decimal::Decimal::from(5), "welcome")?;
//!     if let PlayReport::Played(result) = services.orchestrator.play(&user, "dice", &["3"])? {
//!         println!("{} -> balance {}", result.outcome.narrative, result.balance);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
