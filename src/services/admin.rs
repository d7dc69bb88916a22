//! Admin panel logic: gate check, counts, group listing and opening broadcast
//! sessions. Produces reply text only; sending it is up to the bot handlers.

use chrono::Utc;
use std::str::FromStr;
use teloxide::types::UserId;

use crate::database::{connection::DatabaseManager, models::*};
use crate::error::BotResult;
use crate::services::access::AdminGate;
use crate::services::broadcast::{run_broadcast, BroadcastReport};
use crate::services::gateway::ChatGateway;
use crate::services::sessions::{BroadcastMode, BroadcastSessions};

/// Button actions offered by the admin panel, keyed by callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Stats,
    AdminGroups,
    BroadcastGroups,
    BroadcastUsers,
}

impl AdminAction {
    pub const ALL: [AdminAction; 4] = [
        AdminAction::Stats,
        AdminAction::AdminGroups,
        AdminAction::BroadcastGroups,
        AdminAction::BroadcastUsers,
    ];

    pub fn token(self) -> &'static str {
        match self {
            AdminAction::Stats => "stats",
            AdminAction::AdminGroups => "admin_groups",
            AdminAction::BroadcastGroups => "broadcast_groups",
            AdminAction::BroadcastUsers => "broadcast_users",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminAction::Stats => "📊 Statistics",
            AdminAction::AdminGroups => "👮 Admin groups",
            AdminAction::BroadcastGroups => "📢 Message groups",
            AdminAction::BroadcastUsers => "✉️ Message users",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for AdminAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminAction::ALL
            .into_iter()
            .find(|action| action.token() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Result of a button press before anything is sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonOutcome {
    /// Replace the panel message with this text.
    Edit(String),
    /// Token not recognised; nothing changed.
    Unknown,
}

/// Shared state behind `/admin`, its buttons, and the broadcast follow-up.
#[derive(Clone)]
pub struct AdminConsole {
    db: DatabaseManager,
    gate: AdminGate,
    sessions: BroadcastSessions,
}

impl AdminConsole {
    pub fn new(db: DatabaseManager, gate: AdminGate, sessions: BroadcastSessions) -> Self {
        Self { db, gate, sessions }
    }

    /// Panel text for `/admin`. Fails with `PermissionDenied` for anyone but the admin.
    pub async fn panel(&self, user_id: UserId) -> BotResult<String> {
        self.gate.ensure(user_id)?;
        let stats = BotStats::load(&self.db.pool).await?;
        Ok(render_panel(&stats))
    }

    /// Handles a panel button. The gate is checked before anything is read or stored.
    pub async fn press(&self, user_id: UserId, action: AdminAction) -> BotResult<String> {
        self.gate.ensure(user_id)?;

        let text = match action {
            AdminAction::Stats => {
                let stats = BotStats::load(&self.db.pool).await?;
                render_stats(&stats, &Utc::now().format(TIMESTAMP_FORMAT).to_string())
            }
            AdminAction::AdminGroups => {
                let groups = Group::admin_groups(&self.db.pool).await?;
                render_admin_groups(&groups)
            }
            AdminAction::BroadcastGroups => {
                self.sessions.open(user_id, BroadcastMode::Groups).await;
                broadcast_prompt(BroadcastMode::Groups).to_string()
            }
            AdminAction::BroadcastUsers => {
                self.sessions.open(user_id, BroadcastMode::Users).await;
                broadcast_prompt(BroadcastMode::Users).to_string()
            }
        };
        Ok(text)
    }

    /// Handles raw callback data. Unknown tokens still go through the gate, so a
    /// stranger gets the denial either way.
    pub async fn press_token(&self, user_id: UserId, data: &str) -> BotResult<ButtonOutcome> {
        match data.parse::<AdminAction>() {
            Ok(action) => self.press(user_id, action).await.map(ButtonOutcome::Edit),
            Err(UnknownAction(token)) => {
                tracing::warn!("Unknown callback token '{}' from user {}", token, user_id);
                self.gate.ensure(user_id)?;
                Ok(ButtonOutcome::Unknown)
            }
        }
    }

    /// Treats a private text as broadcast payload if the admin has a live session.
    /// Returns `None` (and does nothing) otherwise. The session is consumed before
    /// sending, so it is gone whatever the outcome.
    pub async fn handle_private_text(
        &self,
        gateway: &dyn ChatGateway,
        user_id: UserId,
        body: &str,
    ) -> BotResult<Option<BroadcastReport>> {
        if !self.gate.is_admin(user_id) {
            return Ok(None);
        }
        let Some(mode) = self.sessions.take(user_id).await else {
            return Ok(None);
        };

        let report = run_broadcast(gateway, &self.db, mode, body).await?;
        Ok(Some(report))
    }
}

pub fn render_panel(stats: &BotStats) -> String {
    format!(
        "🛠 Admin Panel\n\n\
        Statistics:\n\
        • Users: {}\n\
        • Groups: {}\n\
        • Admin groups: {}",
        stats.users, stats.groups, stats.admin_groups
    )
}

pub fn render_stats(stats: &BotStats, updated_at: &str) -> String {
    format!(
        "📊 Bot Statistics\n\n\
        Users: {}\n\
        Groups: {}\n\
        Admin groups: {}\n\
        Last updated: {}",
        stats.users, stats.groups, stats.admin_groups, updated_at
    )
}

pub fn render_admin_groups(groups: &[AdminGroup]) -> String {
    if groups.is_empty() {
        return "No groups have made the bot an admin yet".to_string();
    }

    let mut text = String::from("Groups where the bot is admin:\n\n");
    for group in groups {
        text.push_str(&format!(
            "• {} (ID: {})\n",
            group.group_name.as_deref().unwrap_or("Untitled"),
            group.group_id
        ));
    }
    text
}

pub fn broadcast_prompt(mode: BroadcastMode) -> &'static str {
    match mode {
        BroadcastMode::Groups => "✍️ Send the message to broadcast to all admin groups:",
        BroadcastMode::Users => "✍️ Send the message to broadcast to all users:",
    }
}

pub fn render_report(report: &BroadcastReport) -> String {
    format!("📨 Broadcast to {}: {}", report.mode, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tokens_parse() {
        for action in AdminAction::ALL {
            assert_eq!(action.token().parse::<AdminAction>(), Ok(action));
        }
        assert_eq!(
            "drop_tables".parse::<AdminAction>(),
            Err(UnknownAction("drop_tables".to_string()))
        );
    }

    #[test]
    fn test_render_admin_groups() {
        assert_eq!(render_admin_groups(&[]), "No groups have made the bot an admin yet");

        let groups = vec![
            AdminGroup { group_id: -100123, group_name: Some("Rustaceans".to_string()) },
            AdminGroup { group_id: -100456, group_name: None },
        ];
        let text = render_admin_groups(&groups);
        assert!(text.contains("• Rustaceans (ID: -100123)\n"));
        assert!(text.contains("• Untitled (ID: -100456)\n"));
    }

    #[test]
    fn test_render_panel_and_stats() {
        let stats = BotStats { users: 10, groups: 4, admin_groups: 2 };
        let panel = render_panel(&stats);
        assert!(panel.contains("• Users: 10"));
        assert!(panel.contains("• Admin groups: 2"));

        let text = render_stats(&stats, "2026-01-01 00:00:00");
        assert!(text.contains("Groups: 4"));
        assert!(text.ends_with("Last updated: 2026-01-01 00:00:00"));
    }

    #[test]
    fn test_render_report() {
        let report = BroadcastReport { mode: BroadcastMode::Groups, delivered: 3, total: 5 };
        assert_eq!(render_report(&report), "📨 Broadcast to groups: 3/5 delivered");
    }
}
