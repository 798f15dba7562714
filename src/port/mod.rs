//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! The application layer talks to storage through [`AccountStore`],
//! which the SQLite and in-memory adapters implement.

pub mod outbound;

pub use outbound::store::AccountStore;
