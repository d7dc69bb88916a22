use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::sessions::BroadcastSessions;

/// Periodically drops broadcast sessions the admin opened but never used.
pub struct SessionSweeper {
    sessions: BroadcastSessions,
    scheduler: JobScheduler,
}

impl SessionSweeper {
    pub async fn new(sessions: BroadcastSessions) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            sessions,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let sessions = self.sessions.clone();

        // Every minute, on the minute
        let sweep_job = Job::new_async("0 * * * * *", move |_uuid, _l| {
            let sessions = sessions.clone();
            Box::pin(async move {
                sweep_once(&sessions).await;
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Session sweeper started - purging expired broadcast sessions every minute");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Runs one sweep immediately.
    pub async fn sweep_now(&self) -> usize {
        sweep_once(&self.sessions).await
    }
}

async fn sweep_once(sessions: &BroadcastSessions) -> usize {
    let removed = sessions.purge_expired().await;
    if removed > 0 {
        tracing::debug!(
            "Purged {} expired broadcast session(s), {} still open",
            removed,
            sessions.len().await
        );
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sessions::BroadcastMode;
    use std::time::Duration;
    use teloxide::types::UserId;

    #[tokio::test]
    async fn test_sweep_now_purges_expired_sessions() {
        let sessions = BroadcastSessions::new(Duration::from_millis(5));
        sessions.open(UserId(3), BroadcastMode::Groups).await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        let sweeper = SessionSweeper::new(sessions.clone()).await.unwrap();
        assert_eq!(sweeper.sweep_now().await, 1);
        assert!(sessions.is_empty().await);
    }
}
