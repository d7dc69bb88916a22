//! # Group Cleaner Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the database, starts the
//! session sweeper and health server, and runs the Telegram dispatcher.

use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use group_cleaner_bot::bot::handlers::BotHandler;
use group_cleaner_bot::config::Config;
use group_cleaner_bot::database::connection::DatabaseManager;
use group_cleaner_bot::services::access::AdminGate;
use group_cleaner_bot::services::admin::AdminConsole;
use group_cleaner_bot::services::gateway::{ChatGateway, TelegramGateway};
use group_cleaner_bot::services::health::HealthService;
use group_cleaner_bot::services::sessions::BroadcastSessions;
use group_cleaner_bot::services::sweeper::SessionSweeper;
use group_cleaner_bot::utils::logging::{log_system_event, log_system_warning};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "group_cleaner_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Group Cleaner Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}, Admin: {}",
        config.database_url, config.http_port, config.admin_user_id);

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let me = bot
        .get_me()
        .await
        .context("Failed to reach Telegram, check TELEGRAM_BOT_TOKEN")?;
    log_system_event("Authorized", Some(&format!("@{} ({})", me.username(), me.user.id)));

    let gateway: Arc<dyn ChatGateway> = Arc::new(TelegramGateway::new(bot.clone(), me.user.id));
    let sessions = BroadcastSessions::new(config.broadcast_session_ttl);
    let console = AdminConsole::new(
        db_arc.as_ref().clone(),
        AdminGate::new(config.admin_user_id),
        sessions.clone(),
    );
    let handler = BotHandler::new(db_arc.as_ref().clone(), console, gateway);
    info!("Telegram bot initialized successfully");

    // Start sweeping stale broadcast sessions
    let mut sweeper = match SessionSweeper::new(sessions.clone()).await {
        Ok(sweeper) => sweeper,
        Err(e) => {
            tracing::error!("Failed to create session sweeper: {}", e);
            return Err(anyhow::anyhow!("Failed to create session sweeper: {}", e));
        }
    };
    if let Err(e) = sweeper.start().await {
        log_system_warning("Session sweeper not running", &e.to_string());
    }

    // Initialize health service
    let health_service = HealthService::new(db_arc.clone(), sessions);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error occurred while handling an update",
            ))
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Err(e) = sweeper.stop().await {
        tracing::warn!("Error stopping session sweeper: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
