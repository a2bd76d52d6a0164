//! Configuration loading: file search, env overrides and invalid values.

mod support;

use std::io::Write;

use ehs_dashboard::config::{AppConfig, ConfigError, CONFIG_PATH_ENV};
use support::with_config_env;

#[test]
fn test_env_overrides_defaults() {
    let config = with_config_env(
        &[
            ("PORT", Some("9090")),
            ("JWT_SECRET", Some("s3cret")),
            ("ADMIN_EMAIL", Some("admin@example.com")),
            ("ADMIN_PASSWORD", Some("pw")),
        ],
        || {
            let mut config = AppConfig::default();
            config.apply_env_overrides().unwrap();
            config
        },
    );

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.auth.token_secret_or_default(), "s3cret");
    assert!(!config.auth.uses_development_secret());
    assert_eq!(
        config.auth.bootstrap_admin(),
        Some(("admin@example.com", "pw"))
    );
}

#[test]
fn test_blank_env_values_are_ignored() {
    let config = with_config_env(&[("HOST", Some("  ")), ("JWT_SECRET", Some(""))], || {
        let mut config = AppConfig::default();
        config.apply_env_overrides().unwrap();
        config
    });

    assert_eq!(config.server.host, "0.0.0.0");
    assert!(config.auth.uses_development_secret());
}

#[test]
fn test_invalid_env_value_is_reported() {
    let result = with_config_env(&[("PORT", Some("eighty"))], || {
        AppConfig::default().apply_env_overrides()
    });

    match result {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, "PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_load_reads_explicit_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nport = 7000\nmax_upload_bytes = 2048\n\n[auth]\ntoken_ttl_hours = 2"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = with_config_env(
        &[
            ("TOKEN_TTL_HOURS", Some("5")),
            (CONFIG_PATH_ENV, Some(path.as_str())),
        ],
        || AppConfig::load().unwrap(),
    );

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.server.max_upload_bytes, 2048);
    assert_eq!(config.auth.token_ttl_hours, 5);
    assert_eq!(config.auth.pbkdf2_iterations, 100_000);
}

#[test]
fn test_load_with_missing_explicit_file_fails() {
    let result = with_config_env(
        &[(CONFIG_PATH_ENV, Some("/definitely/not/here/dashboard.toml"))],
        AppConfig::load,
    );

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}
