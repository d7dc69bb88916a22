use teloxide::prelude::*;

use crate::error::{BotError, BotResult, HandlerResult};
use crate::services::access::PERMISSION_DENIED_TEXT;
use crate::services::admin::{AdminConsole, ButtonOutcome};

/// Toast shown to the admin for callback data the panel doesn't know.
pub const UNKNOWN_ACTION_TEXT: &str = "Unknown action";

/// What goes back to Telegram for one button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackReply {
    /// Text for `answerCallbackQuery`, if any.
    pub answer_text: Option<&'static str>,
    /// New text for the message carrying the button, if any.
    pub edit_text: Option<String>,
}

/// Turns a press outcome into the reply. Denials become the fixed text; storage
/// and other errors are passed through.
pub fn callback_reply(outcome: BotResult<ButtonOutcome>) -> BotResult<CallbackReply> {
    match outcome {
        Ok(ButtonOutcome::Edit(text)) => Ok(CallbackReply {
            answer_text: None,
            edit_text: Some(text),
        }),
        Ok(ButtonOutcome::Unknown) => Ok(CallbackReply {
            answer_text: Some(UNKNOWN_ACTION_TEXT),
            edit_text: None,
        }),
        Err(BotError::PermissionDenied) => Ok(CallbackReply {
            answer_text: None,
            edit_text: Some(PERMISSION_DENIED_TEXT.to_string()),
        }),
        Err(e) => Err(e),
    }
}

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    console: AdminConsole,
) -> HandlerResult {
    let user_id = q.from.id;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(data) = q.data.as_deref() else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };
    tracing::info!("Callback received: '{}' from user {} ({})", data, username, user_id);

    let reply = match callback_reply(console.press_token(user_id, data).await) {
        Ok(reply) => reply,
        Err(e) => {
            // Stop the button spinner before giving up on the update
            bot.answer_callback_query(q.id.clone()).await?;
            return Err(e.into());
        }
    };

    let mut answer = bot.answer_callback_query(q.id.clone());
    if let Some(text) = reply.answer_text {
        answer = answer.text(text);
    }
    answer.await?;

    if let (Some(text), Some(message)) = (reply.edit_text, q.message) {
        bot.edit_message_text(message.chat.id, message.id, text).await?;
    }

    Ok(())
}
