use std::fmt;
use teloxide::types::ChatId;
use tracing::{info, warn};
use uuid::Uuid;

use crate::database::{connection::DatabaseManager, models::*};
use crate::services::gateway::ChatGateway;
use crate::services::sessions::BroadcastMode;

/// Outcome of one broadcast run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastReport {
    pub mode: BroadcastMode,
    pub delivered: usize,
    pub total: usize,
}

impl BroadcastReport {
    pub fn failed(&self) -> usize {
        self.total - self.delivered
    }
}

impl fmt::Display for BroadcastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} delivered", self.delivered, self.total)
    }
}

/// Recipients for `mode`, read from the store at call time.
pub async fn resolve_targets(
    db: &DatabaseManager,
    mode: BroadcastMode,
) -> Result<Vec<ChatId>, sqlx::Error> {
    let ids = match mode {
        BroadcastMode::Groups => Group::admin_groups(&db.pool)
            .await?
            .into_iter()
            .map(|g| g.group_id)
            .collect(),
        BroadcastMode::Users => User::all_ids(&db.pool).await?,
    };
    Ok(ids.into_iter().map(ChatId).collect())
}

/// Sends `body` to every target one after another. A failed recipient is logged
/// and skipped; there is no retry and no per-send deadline.
pub async fn deliver(
    gateway: &dyn ChatGateway,
    mode: BroadcastMode,
    targets: &[ChatId],
    body: &str,
) -> BroadcastReport {
    let run_id = Uuid::new_v4();
    info!("BROADCAST[{}]: sending to {} {}", run_id, targets.len(), mode);

    let mut delivered = 0;
    for &chat_id in targets {
        match gateway.send_text(chat_id, body).await {
            Ok(()) => delivered += 1,
            Err(e) => warn!("BROADCAST[{}]: skipping {}: {}", run_id, chat_id, e),
        }
    }

    let report = BroadcastReport {
        mode,
        delivered,
        total: targets.len(),
    };
    info!("BROADCAST[{}]: finished, {}, {} failed", run_id, report, report.failed());
    report
}

/// Resolves targets for `mode` and delivers `body` to them.
pub async fn run_broadcast(
    gateway: &dyn ChatGateway,
    db: &DatabaseManager,
    mode: BroadcastMode,
    body: &str,
) -> Result<BroadcastReport, sqlx::Error> {
    let targets = resolve_targets(db, mode).await?;
    Ok(deliver(gateway, mode, &targets, body).await)
}
