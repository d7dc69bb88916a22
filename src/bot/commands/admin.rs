use teloxide::prelude::*;

use crate::bot::keyboards::admin_panel_keyboard;
use crate::error::{BotError, BotResult, HandlerResult};
use crate::services::access::PERMISSION_DENIED_TEXT;
use crate::services::admin::AdminConsole;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// Reply to `/admin`: the panel comes with its buttons, a denial without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelReply {
    pub text: String,
    pub with_keyboard: bool,
}

pub fn panel_reply(result: BotResult<String>) -> BotResult<PanelReply> {
    match result {
        Ok(text) => Ok(PanelReply { text, with_keyboard: true }),
        Err(BotError::PermissionDenied) => Ok(PanelReply {
            text: PERMISSION_DENIED_TEXT.to_string(),
            with_keyboard: false,
        }),
        Err(e) => Err(e),
    }
}

/// `/admin`: counts plus the four action buttons, admin only.
pub async fn handle_admin(
    bot: Bot,
    msg: Message,
    console: &AdminConsole,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let display = user.username.as_deref().unwrap_or(&user.first_name);
    log_command_start("admin", display, user.id.0 as i64, msg.chat.id.0, None);

    let reply = match panel_reply(console.panel(user.id).await) {
        Ok(reply) => reply,
        Err(e) => {
            log_command_error("admin", display, user.id.0 as i64, msg.chat.id.0, &e.to_string());
            return Err(e.into());
        }
    };

    if reply.with_keyboard {
        bot.send_message(msg.chat.id, reply.text)
            .reply_markup(admin_panel_keyboard())
            .await?;
        log_command_success("admin", display, user.id.0 as i64, msg.chat.id.0, None);
    } else {
        bot.send_message(msg.chat.id, reply.text).await?;
    }

    Ok(())
}
