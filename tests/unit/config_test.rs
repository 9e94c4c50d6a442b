//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use meterdash::config::{ConfigError, DatabaseConfig, SecurityConfig};
use serial_test::serial;

// =============================================================================
// Database Config Tests
// =============================================================================

#[test]
#[serial]
fn test_database_config_defaults() {
    std::env::set_var("DATABASE_URL", "postgres://localhost/meterdash");
    std::env::remove_var("DATABASE_MAX_CONNECTIONS");
    std::env::remove_var("DATABASE_MIN_CONNECTIONS");

    let config = DatabaseConfig::from_env().unwrap();

    assert_eq!(config.url, "postgres://localhost/meterdash");
    assert_eq!(config.max_connections, 10);
    assert_eq!(config.min_connections, 1);
    assert_eq!(config.acquire_timeout.as_secs(), 5);

    std::env::remove_var("DATABASE_URL");
}

#[test]
#[serial]
fn test_database_config_requires_url() {
    std::env::remove_var("DATABASE_URL");

    let result = DatabaseConfig::from_env();
    assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
}

#[test]
#[serial]
fn test_database_config_invalid_values_use_defaults() {
    std::env::set_var("DATABASE_URL", "postgres://localhost/meterdash");
    std::env::set_var("DATABASE_MAX_CONNECTIONS", "not-a-number");

    let config = DatabaseConfig::from_env().unwrap();

    // Should fall back to the default
    assert_eq!(config.max_connections, 10);

    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("DATABASE_MAX_CONNECTIONS");
}

// =============================================================================
// Security Config Tests
// =============================================================================

#[test]
#[serial]
fn test_security_config_defaults() {
    std::env::remove_var("SSL_PROXY");
    std::env::remove_var("SESSION_SECRET_KEY");

    let config = SecurityConfig::from_env().unwrap();

    assert!(!config.ssl_proxy);
    assert!(config.session_secret_key.is_none());
}

#[test]
#[serial]
fn test_ssl_proxy_requires_session_secret() {
    std::env::set_var("SSL_PROXY", "true");
    std::env::remove_var("SESSION_SECRET_KEY");

    let result = SecurityConfig::from_env();
    assert!(matches!(result, Err(ConfigError::MissingSessionSecret)));

    std::env::remove_var("SSL_PROXY");
}

#[test]
#[serial]
fn test_ssl_proxy_with_session_secret() {
    std::env::set_var("SSL_PROXY", "1");
    std::env::set_var("SESSION_SECRET_KEY", "a".repeat(64));

    let config = SecurityConfig::from_env().unwrap();

    assert!(config.ssl_proxy);
    assert_eq!(config.session_secret_key.unwrap().len(), 64);

    std::env::remove_var("SSL_PROXY");
    std::env::remove_var("SESSION_SECRET_KEY");
}
