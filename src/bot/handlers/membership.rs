use teloxide::types::{ChatMemberStatus, ChatMemberUpdated};
use tracing::info;

use crate::bot::routing::ChatScope;
use crate::database::connection::DatabaseManager;
use crate::error::HandlerResult;
use crate::services::moderation::store_group;

/// The bot's own membership changed in some chat (added, promoted, removed).
pub async fn own_membership_handler(upd: ChatMemberUpdated, db: DatabaseManager) -> HandlerResult {
    if ChatScope::of(&upd.chat) != ChatScope::Group {
        return Ok(());
    }

    let status = upd.new_chat_member.status();
    if !is_present(status) {
        info!("Bot left or was removed from chat {}", upd.chat.id);
        return Ok(());
    }

    store_group(
        &db,
        upd.chat.id,
        upd.chat.title(),
        status == ChatMemberStatus::Administrator,
    )
    .await?;
    Ok(())
}

/// Statuses in which the bot is still part of the chat.
pub fn is_present(status: ChatMemberStatus) -> bool {
    !matches!(status, ChatMemberStatus::Left | ChatMemberStatus::Banned)
}
