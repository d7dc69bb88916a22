use teloxide::types::{ChatId, ChatMemberStatus, MessageId};
use tracing::{debug, info, warn};

use crate::database::{connection::DatabaseManager, models::Group};
use crate::services::gateway::ChatGateway;
use crate::utils::logging::log_database_error;

/// Records a group the bot saw activity in. The bot's own status is looked up
/// first; a failed lookup is logged and the group is stored without the admin flag.
/// Returns whether the group was flagged as admin.
pub async fn record_group(
    gateway: &dyn ChatGateway,
    db: &DatabaseManager,
    chat_id: ChatId,
    title: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let is_admin = match gateway.own_member_status(chat_id).await {
        Ok(status) => status == ChatMemberStatus::Administrator,
        Err(e) => {
            warn!("Failed to check own admin status in chat {}: {}", chat_id, e);
            false
        }
    };

    store_group(db, chat_id, title, is_admin).await?;
    if is_admin {
        info!("Bot is admin in {} ({})", title.unwrap_or("untitled group"), chat_id);
    }
    Ok(is_admin)
}

/// Stores a group with an already-known admin status (e.g. from a `my_chat_member` update).
pub async fn store_group(
    db: &DatabaseManager,
    chat_id: ChatId,
    title: Option<&str>,
    is_admin: bool,
) -> Result<(), sqlx::Error> {
    Group::record_observation(&db.pool, chat_id.0, title, is_admin)
        .await
        .map_err(|e| {
            log_database_error("UPSERT", "groups", &e.to_string(), Some(&chat_id.to_string()));
            e
        })?;
    debug!("Recorded group {} (admin: {})", chat_id, is_admin);
    Ok(())
}

/// Deletes a join/leave service message. Failures (usually missing delete rights)
/// are logged and swallowed. Returns whether the message was removed.
pub async fn remove_service_message(
    gateway: &dyn ChatGateway,
    chat_id: ChatId,
    message_id: MessageId,
    title: Option<&str>,
) -> bool {
    match gateway.delete_message(chat_id, message_id).await {
        Ok(()) => {
            info!("Removed service message {} in {}", message_id.0, title.unwrap_or("untitled group"));
            true
        }
        Err(e) => {
            warn!("Failed to remove service message {} in {}: {}", message_id.0, chat_id, e);
            false
        }
    }
}
