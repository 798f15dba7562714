//! Persistence port for player accounts and their history.

use crate::domain::{Amount, LedgerEntry, Posting, UserId};
use crate::error::Result;

/// Storage operations for balances and ledger history.
///
/// Methods are synchronous and may block: the SQLite store waits up to its
/// busy timeout for a write lock. Async callers run them on a blocking
/// thread, and the ledger holds only a per-user lock around them.
pub trait AccountStore: Send + Sync {
    /// Create the account with `starting` balance if it does not exist.
    ///
    /// Returns the current balance either way.
    fn open_account(&self, user: &UserId, starting: Amount) -> Result<Amount>;

    /// Current balance, or `None` for an unknown user.
    fn balance(&self, user: &UserId) -> Result<Option<Amount>>;

    /// Commit postings in order as one atomic unit.
    ///
    /// Fails with `LedgerError::InsufficientFunds` without writing anything
    /// if any intermediate balance would go negative. Returns the final
    /// balance.
    fn apply(&self, user: &UserId, postings: &[Posting]) -> Result<Amount>;

    /// Most recent entries, newest first.
    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<LedgerEntry>>;

    /// Full history, oldest first.
    fn entries(&self, user: &UserId) -> Result<Vec<LedgerEntry>>;
}
