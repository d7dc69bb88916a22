use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{admin::handle_admin, start::handle_start, Command};
use crate::bot::handlers::BotHandler;
use crate::bot::routing::{classify_message, IncomingMessage};
use crate::error::HandlerResult;
use crate::services::admin::render_report;
use crate::services::moderation::{record_group, remove_service_message};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    me: Me,
    ctx: BotHandler,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start(payload) => {
            handle_start(bot, msg, payload, me, &ctx.db).await?;
        }
        Command::Admin => {
            handle_admin(bot, msg, &ctx.console).await?;
        }
    }
    Ok(())
}

/// What the bot does with a non-command message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction<'a> {
    /// Delete the join/leave notice.
    RemoveServiceMessage,
    /// Store the group and refresh its admin flag.
    RecordGroup,
    /// Hand the text to the admin console, which may send a broadcast.
    Broadcast(&'a str),
    Nothing,
}

pub fn action_for(kind: IncomingMessage<'_>) -> MessageAction<'_> {
    match kind {
        IncomingMessage::MembersJoined | IncomingMessage::MemberLeft => {
            MessageAction::RemoveServiceMessage
        }
        IncomingMessage::GroupActivity => MessageAction::RecordGroup,
        IncomingMessage::PrivateText(text) => MessageAction::Broadcast(text),
        IncomingMessage::Ignored => MessageAction::Nothing,
    }
}

/// Every non-command message lands here and is routed by its classification.
pub async fn message_handler(bot: Bot, msg: Message, ctx: BotHandler) -> HandlerResult {
    match action_for(classify_message(&msg)) {
        MessageAction::RemoveServiceMessage => {
            remove_service_message(ctx.gateway.as_ref(), msg.chat.id, msg.id, msg.chat.title()).await;
        }
        MessageAction::RecordGroup => {
            record_group(ctx.gateway.as_ref(), &ctx.db, msg.chat.id, msg.chat.title()).await?;
        }
        MessageAction::Broadcast(text) => {
            let Some(user) = msg.from() else {
                return Ok(());
            };
            let outcome = ctx
                .console
                .handle_private_text(ctx.gateway.as_ref(), user.id, text)
                .await?;
            if let Some(report) = outcome {
                bot.send_message(msg.chat.id, render_report(&report)).await?;
            }
        }
        MessageAction::Nothing => {
            tracing::trace!("Ignoring message {} in chat {}", msg.id.0, msg.chat.id);
        }
    }
    Ok(())
}
