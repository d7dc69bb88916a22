use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use teloxide::types::UserId;
use tokio::sync::Mutex;

/// Which audience a pending broadcast goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastMode {
    Groups,
    Users,
}

impl fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcastMode::Groups => write!(f, "groups"),
            BroadcastMode::Users => write!(f, "users"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingBroadcast {
    mode: BroadcastMode,
    expires_at: Instant,
}

/// Pending broadcast per admin conversation. Entries are consumed by the next
/// private text of that user and silently dropped once their TTL passes.
#[derive(Clone)]
pub struct BroadcastSessions {
    inner: Arc<Mutex<HashMap<UserId, PendingBroadcast>>>,
    ttl: Duration,
}

impl BroadcastSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Opens (or replaces) the pending broadcast for `user_id`.
    pub async fn open(&self, user_id: UserId, mode: BroadcastMode) {
        let pending = PendingBroadcast {
            mode,
            expires_at: Instant::now() + self.ttl,
        };
        self.inner.lock().await.insert(user_id, pending);
    }

    /// Mode of a live session without consuming it.
    pub async fn peek(&self, user_id: UserId) -> Option<BroadcastMode> {
        let now = Instant::now();
        self.inner
            .lock()
            .await
            .get(&user_id)
            .filter(|p| p.expires_at > now)
            .map(|p| p.mode)
    }

    /// Removes the session for `user_id` and returns its mode if it had not expired.
    pub async fn take(&self, user_id: UserId) -> Option<BroadcastMode> {
        let now = Instant::now();
        self.inner
            .lock()
            .await
            .remove(&user_id)
            .filter(|p| p.expires_at > now)
            .map(|p| p.mode)
    }

    /// Drops expired entries, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        sessions.retain(|_, p| p.expires_at > now);
        before - sessions.len()
    }

    /// Sessions that have not expired yet. Expired entries still waiting for the
    /// sweeper are not counted.
    pub async fn live_count(&self) -> usize {
        let now = Instant::now();
        self.inner
            .lock()
            .await
            .values()
            .filter(|p| p.expires_at > now)
            .count()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
