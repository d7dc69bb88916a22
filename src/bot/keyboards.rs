use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

use crate::services::admin::AdminAction;

/// Deep link that opens Telegram's "add to group" picker for the bot.
pub fn add_to_group_url(bot_username: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("https://t.me/{bot_username}?startgroup=true"))
}

pub fn add_to_group_keyboard(bot_username: &str) -> Result<InlineKeyboardMarkup, url::ParseError> {
    let url = add_to_group_url(bot_username)?;
    Ok(InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::url("➕ Add to group", url),
    ]]))
}

/// One button per row, in panel order.
pub fn admin_panel_keyboard() -> InlineKeyboardMarkup {
    let rows = AdminAction::ALL
        .into_iter()
        .map(|action| vec![InlineKeyboardButton::callback(action.label(), action.token())])
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}
