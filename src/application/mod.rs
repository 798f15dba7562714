//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod blackjack;
pub mod catalog;
pub mod ledger;
pub mod orchestrator;

pub use blackjack::{BlackjackReport, BlackjackTables};
pub use catalog::GameCatalog;
pub use ledger::Ledger;
pub use orchestrator::{GameOrchestrator, PlayReport};
