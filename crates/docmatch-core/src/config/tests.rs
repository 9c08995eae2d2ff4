use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_docmatch_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("DOCMATCH_PORT");
        env::remove_var("DOCMATCH_BIND_ADDR");
        env::remove_var("DOCMATCH_ENGINE_URL");
        env::remove_var("DOCMATCH_ENGINE_TIMEOUT_SECS");
        env::remove_var("DOCMATCH_SNAPSHOT_PATH");
        env::remove_var("DOCMATCH_CORS_ORIGIN");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.engine_url, "http://localhost:5001");
    assert_eq!(config.engine_timeout_secs, 120);
    assert_eq!(config.snapshot_path, PathBuf::from("./.data/last_batch.json"));
    assert_eq!(config.cors_origin, "http://localhost:3000");
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3001,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3001");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_docmatch_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(config.engine_url, "http://localhost:5001");
}

#[test]
#[serial]
fn test_from_env_with_overrides() {
    clear_docmatch_env();

    let config = with_env_vars(
        &[
            ("DOCMATCH_PORT", "3001"),
            ("DOCMATCH_BIND_ADDR", "0.0.0.0"),
            ("DOCMATCH_ENGINE_URL", "http://engine.internal:5001"),
            ("DOCMATCH_ENGINE_TIMEOUT_SECS", "30"),
            ("DOCMATCH_SNAPSHOT_PATH", "/tmp/docmatch/batch.json"),
            ("DOCMATCH_CORS_ORIGIN", "https://app.example.com"),
        ],
        || Config::from_env().expect("should parse overrides"),
    );

    assert_eq!(config.port, 3001);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
    );
    assert_eq!(config.engine_url, "http://engine.internal:5001");
    assert_eq!(config.engine_timeout_secs, 30);
    assert_eq!(config.snapshot_path, PathBuf::from("/tmp/docmatch/batch.json"));
    assert_eq!(config.cors_origin, "https://app.example.com");
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_docmatch_env();

    let result = with_env_vars(&[("DOCMATCH_PORT", "not-a-port")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));

    let result = with_env_vars(&[("DOCMATCH_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_invalid_bind_addr_is_rejected() {
    clear_docmatch_env();

    let result = with_env_vars(&[("DOCMATCH_BIND_ADDR", "localhost-ish")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
}

#[test]
#[serial]
fn test_unparseable_timeout_falls_back_to_default() {
    clear_docmatch_env();

    let config = with_env_vars(&[("DOCMATCH_ENGINE_TIMEOUT_SECS", "soon")], || {
        Config::from_env().expect("should fall back to default")
    });
    assert_eq!(config.engine_timeout_secs, 120);
}

#[test]
fn test_validate_rejects_non_http_engine_url() {
    let config = Config {
        engine_url: "ftp://engine:5001".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidEngineUrl { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = Config {
        engine_timeout_secs: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimeout { value: 0 })
    ));
}

#[test]
fn test_validate_rejects_directory_snapshot_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config {
        snapshot_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::SnapshotPathIsADirectory { .. })
    ));
}

#[test]
fn test_validate_accepts_defaults() {
    Config::default().validate().expect("defaults should validate");
}
