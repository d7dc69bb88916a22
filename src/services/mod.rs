pub mod access;
pub mod admin;
pub mod broadcast;
pub mod gateway;
pub mod health;
pub mod moderation;
pub mod sessions;
pub mod sweeper;
