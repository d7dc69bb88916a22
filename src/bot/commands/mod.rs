pub mod admin;
pub mod start;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Group Cleaner Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    // Carries the deep-link payload, e.g. `true` from `?startgroup=true`.
    #[command(description = "Start the bot")]
    Start(String),
    #[command(description = "Open the admin panel")]
    Admin,
}
