#![allow(dead_code)]

use async_trait::async_trait;
use group_cleaner_bot::database::connection::DatabaseManager;
use group_cleaner_bot::error::{BotError, BotResult};
use group_cleaner_bot::services::gateway::ChatGateway;
use std::collections::HashSet;
use std::sync::Mutex;
use teloxide::types::{ChatId, ChatMemberStatus, MessageId};
use tempfile::TempDir;

/// Fresh migrated database in a temp directory. Keep the `TempDir` alive for the test.
pub async fn setup_test_db() -> (DatabaseManager, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let db = DatabaseManager::new(&db_url)
        .await
        .expect("Failed to create test database");
    db.run_migrations().await.expect("Failed to run migrations");

    (db, temp_dir)
}

/// Gateway double that records every call and fails for configured chats.
#[derive(Default)]
pub struct RecordingGateway {
    failing_chats: HashSet<i64>,
    status: Option<ChatMemberStatus>,
    pub sent: Mutex<Vec<(i64, String)>>,
    pub deleted: Mutex<Vec<(i64, i32)>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(chats: &[i64]) -> Self {
        Self {
            failing_chats: chats.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Status reported by `own_member_status`; without one the lookup fails.
    pub fn with_status(mut self, status: ChatMemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sent_to(&self) -> Vec<i64> {
        self.sent.lock().unwrap().iter().map(|(chat, _)| *chat).collect()
    }

    pub fn deleted(&self) -> Vec<(i64, i32)> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self, chat_id: ChatId) -> BotResult<()> {
        if self.failing_chats.contains(&chat_id.0) {
            Err(BotError::Delivery {
                chat_id: chat_id.0,
                reason: "Forbidden: bot was blocked by the user".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()> {
        self.check(chat_id)?;
        self.sent.lock().unwrap().push((chat_id.0, text.to_string()));
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        self.check(chat_id)?;
        self.deleted.lock().unwrap().push((chat_id.0, message_id.0));
        Ok(())
    }

    async fn own_member_status(&self, chat_id: ChatId) -> BotResult<ChatMemberStatus> {
        self.status.ok_or(BotError::Delivery {
            chat_id: chat_id.0,
            reason: "Bad Request: chat not found".to_string(),
        })
    }
}
