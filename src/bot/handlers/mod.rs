pub mod callback;
pub mod membership;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::{CallbackQuery, ChatMemberUpdated, Me, Message},
};

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::error::HandlerError;
use crate::services::admin::AdminConsole;
use crate::services::gateway::ChatGateway;

/// Everything a handler may need, cloned into each branch of the schema.
#[derive(Clone)]
pub struct BotHandler {
    pub db: DatabaseManager,
    pub console: AdminConsole,
    pub gateway: Arc<dyn ChatGateway>,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, console: AdminConsole, gateway: Arc<dyn ChatGateway>) -> Self {
        Self { db, console, gateway }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let commands = self.clone();
        let messages = self.clone();
        let callbacks = self.clone();
        let memberships = self.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command, me: Me| {
                        let ctx = commands.clone();
                        async move { message::command_handler(bot, msg, cmd, me, ctx).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let ctx = messages.clone();
                async move { message::message_handler(bot, msg, ctx).await }
            }))
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let ctx = callbacks.clone();
                async move { callback::callback_handler(bot, q, ctx.console).await }
            }))
            .branch(Update::filter_my_chat_member().endpoint(move |upd: ChatMemberUpdated| {
                let ctx = memberships.clone();
                async move { membership::own_membership_handler(upd, ctx.db).await }
            }))
    }
}
