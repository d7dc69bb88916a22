use group_cleaner_bot::config::Config;
use std::env;
use std::sync::Mutex;
use std::time::Duration;
use teloxide::types::UserId;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const VARS: [&str; 5] = [
    "TELEGRAM_BOT_TOKEN",
    "ADMIN_USER_ID",
    "DATABASE_URL",
    "HTTP_PORT",
    "BROADCAST_SESSION_TTL_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn set_required() {
    env::set_var("TELEGRAM_BOT_TOKEN", "123456:test_token");
    env::set_var("ADMIN_USER_ID", "7563536517");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("BROADCAST_SESSION_TTL_SECS", "30");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "123456:test_token");
    assert_eq!(config.admin_user_id, UserId(7563536517));
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.broadcast_session_ttl, Duration::from_secs(30));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();

    let config = Config::from_env().unwrap();

    assert_eq!(config.database_url, "sqlite:./data/bot_data.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.broadcast_session_ttl, Duration::from_secs(600));

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("ADMIN_USER_ID", "1");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_env();
}

#[test]
fn test_config_rejects_placeholder_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "YOUR_BOT_TOKEN_HERE");
    env::set_var("ADMIN_USER_ID", "1");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("placeholder"));

    clear_env();
}

#[test]
fn test_config_admin_id_required_and_numeric() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "123456:test_token");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("ADMIN_USER_ID must be set"));

    env::set_var("ADMIN_USER_ID", "@someone");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid ADMIN_USER_ID"));

    env::set_var("ADMIN_USER_ID", " 42 ");
    assert_eq!(Config::from_env().unwrap().admin_user_id, UserId(42));

    clear_env();
}

#[test]
fn test_config_invalid_port_and_ttl() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    set_required();
    env::set_var("HTTP_PORT", "invalid_port");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "3000");
    env::set_var("BROADCAST_SESSION_TTL_SECS", "-5");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid BROADCAST_SESSION_TTL_SECS"));

    clear_env();
}

#[test]
fn test_config_empty_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "");
    env::set_var("ADMIN_USER_ID", "1");
    assert!(Config::from_env().is_err());

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATABASE_URL", "");
    env::set_var("BROADCAST_SESSION_TTL_SECS", "");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/bot_data.db");
    assert_eq!(config.broadcast_session_ttl, Duration::from_secs(600));

    clear_env();
}
