use teloxide::prelude::*;
use teloxide::types::Me;

use crate::bot::keyboards::add_to_group_keyboard;
use crate::database::{connection::DatabaseManager, models::User};
use crate::error::HandlerResult;
use crate::utils::logging::{log_command_start, log_command_success, log_database_error};

pub const WELCOME_TEXT: &str = "👋 Hi! I delete \"joined\" and \"left\" messages in groups.\n\n\
Add me to your group and make me an admin.\n\n\
What I do:\n\
• Remove the service message when new members join\n\
• Remove the service message when a member leaves\n\
• Never post anything extra in your group";

/// `/start`: remember the user (overwriting any previous row) and greet them.
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    payload: String,
    me: Me,
    db: &DatabaseManager,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let display = user.username.as_deref().unwrap_or(&user.first_name);
    let payload = payload.trim();
    let details = (!payload.is_empty()).then(|| format!("payload '{payload}'"));
    log_command_start("start", display, user.id.0 as i64, msg.chat.id.0, details.as_deref());

    if let Err(e) = User::upsert(
        &db.pool,
        user.id.0 as i64,
        user.username.as_deref(),
        Some(user.first_name.as_str()),
        user.last_name.as_deref(),
    )
    .await
    {
        log_database_error("UPSERT", "users", &e.to_string(), Some(&user.id.to_string()));
        return Err(e.into());
    }

    let keyboard = add_to_group_keyboard(me.username())?;
    bot.send_message(msg.chat.id, WELCOME_TEXT)
        .reply_markup(keyboard)
        .await?;

    log_command_success("start", display, user.id.0 as i64, msg.chat.id.0, None);
    Ok(())
}
