//! The three platform calls the bot core depends on, behind a trait so the
//! broadcast and cleanup flows can run against a recording double in tests.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatMemberStatus, MessageId, UserId};

use crate::error::{BotError, BotResult};

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends plain text to a chat.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()>;
    /// Deletes one message in a chat.
    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()>;
    /// The bot's own membership status in a chat.
    async fn own_member_status(&self, chat_id: ChatId) -> BotResult<ChatMemberStatus>;
}

/// teloxide-backed gateway. Holds the bot's own id so status lookups don't need `getMe` each time.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
    me: UserId,
}

impl TelegramGateway {
    pub fn new(bot: Bot, me: UserId) -> Self {
        Self { bot, me }
    }
}

fn delivery_error(chat_id: ChatId, err: teloxide::RequestError) -> BotError {
    BotError::Delivery {
        chat_id: chat_id.0,
        reason: err.to_string(),
    }
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()> {
        self.bot
            .send_message(chat_id, text)
            .await
            .map_err(|e| delivery_error(chat_id, e))?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> BotResult<()> {
        self.bot
            .delete_message(chat_id, message_id)
            .await
            .map_err(|e| delivery_error(chat_id, e))?;
        Ok(())
    }

    async fn own_member_status(&self, chat_id: ChatId) -> BotResult<ChatMemberStatus> {
        let member = self.bot.get_chat_member(chat_id, self.me).await?;
        Ok(member.status())
    }
}
