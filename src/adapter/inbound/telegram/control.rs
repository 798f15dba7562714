//! Telegram command execution against the casino services.

use crate::domain::UserId;
use crate::infrastructure::bootstrap::Services;

mod dispatch;
mod render;

/// Command executor shared by every chat handler.
#[derive(Clone)]
pub struct TelegramControl {
    services: Services,
}

impl TelegramControl {
    #[must_use]
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// True when `caller` may run admin commands.
    #[must_use]
    pub fn is_admin(&self, caller: u64) -> bool {
        self.services.config.telegram.is_admin(caller)
    }
}

fn player(caller: u64) -> UserId {
    UserId::from(caller)
}
