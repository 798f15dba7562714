//! Game and ledger domain logic, free of I/O.
//!
//! The outcome generators take an injected random source so that plays
//! can be replayed deterministically from a seed.

pub mod blackjack;
pub mod darts;
pub mod dice;
pub mod error;
pub mod game;
pub mod id;
pub mod ledger;
pub mod money;
pub mod outcome;
pub mod price;
pub mod slots;
pub mod stats;
pub mod weighted;

pub use error::DomainError;
pub use game::GameType;
pub use id::UserId;
pub use ledger::{EntryKind, LedgerEntry, Posting};
pub use money::{format_amount, format_delta, Amount};
pub use outcome::{GameResult, Outcome};
pub use price::PriceTable;
pub use stats::{GameStats, PlayerStats};
