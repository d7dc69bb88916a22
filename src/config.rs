use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;
use teloxide::types::UserId;

/// Token value shipped in `.env.example`; refusing it keeps an unconfigured bot from starting.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/bot_data.db";
const DEFAULT_SESSION_TTL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_user_id: UserId,
    pub database_url: String,
    pub http_port: u16,
    pub broadcast_session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }
        if token.trim() == PLACEHOLDER_TOKEN {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN is still the placeholder value, put your real bot token there"));
        }

        let admin_str = env::var("ADMIN_USER_ID")
            .map_err(|_| anyhow!("ADMIN_USER_ID must be set"))?;
        let admin_user_id = admin_str
            .trim()
            .parse::<u64>()
            .map(UserId)
            .map_err(|_| anyhow!("Invalid ADMIN_USER_ID"))?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_url = if database_url.trim().is_empty() {
            DEFAULT_DATABASE_URL.to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let ttl_secs = match env::var("BROADCAST_SESSION_TTL_SECS") {
            Ok(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow!("Invalid BROADCAST_SESSION_TTL_SECS"))?,
            _ => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Config {
            telegram_bot_token: token,
            admin_user_id,
            database_url,
            http_port,
            broadcast_session_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
