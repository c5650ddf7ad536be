use listmonk_client::application::config::{Config, default_user_agent};
use listmonk_client::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use listmonk_client::utils::config::get_env_or_default;
use std::time::Duration;

#[test]
fn test_get_env_or_default_missing_variable() {
    let value: u64 = get_env_or_default("LISTMONK_TEST_SURELY_UNSET_VARIABLE", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_config_builders() {
    let config = Config::default()
        .with_timeout_secs(DEFAULT_TIMEOUT_SECS * 3)
        .with_page_size(DEFAULT_PAGE_SIZE / 5);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.page_size, 100);
    assert_eq!(config.user_agent, default_user_agent());
}

#[test]
fn test_config_display() {
    let config = Config::default().with_timeout_secs(7).with_page_size(50);
    let display = config.to_string();
    assert!(!display.is_empty());
    assert!(display.contains("timeout_secs"));
}
