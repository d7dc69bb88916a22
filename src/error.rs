use thiserror::Error;

/// Failures the bot distinguishes while handling an update.
#[derive(Debug, Error)]
pub enum BotError {
    /// A non-admin tried a privileged action.
    #[error("permission denied")]
    PermissionDenied,

    /// Sending to or deleting in a specific chat failed (blocked bot, missing rights, deleted chat).
    #[error("delivery to chat {chat_id} failed: {reason}")]
    Delivery { chat_id: i64, reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

pub type BotResult<T> = Result<T, BotError>;

/// Error type the dispatcher schema runs with.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type HandlerResult = Result<(), HandlerError>;
