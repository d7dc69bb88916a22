use teloxide::types::UserId;

use crate::error::{BotError, BotResult};

/// Reply shown to anyone who is not the configured admin.
pub const PERMISSION_DENIED_TEXT: &str = "⛔ You don't have admin rights!";

/// Single-admin gate. The id is injected from configuration.
#[derive(Debug, Clone, Copy)]
pub struct AdminGate {
    admin_id: UserId,
}

impl AdminGate {
    pub fn new(admin_id: UserId) -> Self {
        Self { admin_id }
    }

    pub fn is_admin(&self, user_id: UserId) -> bool {
        user_id == self.admin_id
    }

    pub fn ensure(&self, user_id: UserId) -> BotResult<()> {
        if self.is_admin(user_id) {
            Ok(())
        } else {
            tracing::warn!("Denied privileged action for user {}", user_id);
            Err(BotError::PermissionDenied)
        }
    }
}
