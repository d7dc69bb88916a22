//! # Group Cleaner Bot
//!
//! A Telegram bot that keeps groups tidy and lets its owner reach everyone it knows.
//!
//! ## Features
//! - Deletes "joined" / "left" service messages in groups and supergroups
//! - Tracks users (on `/start`) and groups (on activity) in SQLite
//! - Admin panel with live statistics and the list of groups where the bot is admin
//! - Broadcasts a text to every admin group or every known user

/// Bot commands, update routing and handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Error types shared by handlers and services
pub mod error;
/// Admin gate, broadcast, moderation and background services
pub mod services;
/// Logging helpers
pub mod utils;
