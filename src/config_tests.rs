use crate::config::{Config, Mode};
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    for key in [
        "MODE",
        "API_BASE_URL",
        "REQUEST_TIMEOUT_SECS",
        "HTTP_MAX_RETRIES",
        "RECORDS_PAGE_SIZE",
        "TREND_LIMIT",
    ] {
        // Safe under ENV_LOCK: no other thread touches the environment.
        unsafe { env::remove_var(key) };
    }
}

fn set_env(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.mode, Mode::Mock);
    assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.http_max_retries, 3);
    assert_eq!(config.records_page_size, 50);
    assert_eq!(config.trend_limit, 30);
}

#[test]
fn test_config_live_mode() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("MODE", "live");
    set_env("API_BASE_URL", "https://tracker.example.com/api/v1");
    set_env("TREND_LIMIT", "60");

    let config = Config::from_env().unwrap();

    assert_eq!(config.mode, Mode::Live);
    assert_eq!(config.api_base_url, "https://tracker.example.com/api/v1");
    assert_eq!(config.trend_limit, 60);

    clear_env();
}

#[test]
fn test_config_rejects_unknown_mode() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("MODE", "offline");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_rejects_unparseable_base_url() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("API_BASE_URL", "not a url");

    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_rejects_non_numeric_timeout() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    set_env("REQUEST_TIMEOUT_SECS", "soon");

    assert!(Config::from_env().is_err());

    clear_env();
}
