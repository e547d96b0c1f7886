use std::sync::Mutex;

use super::*;

/// Serializes tests that mutate the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("ROVER_API_BASE_URL");
        std::env::remove_var("PORT");
    }
}

#[test]
fn parse_port_defaults_when_absent() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port(Some("8081")).unwrap(), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port(Some("eighty")), Err(ServerConfigError::InvalidPort(v)) if v == "eighty"));
    assert!(matches!(parse_port(Some("70000")), Err(ServerConfigError::InvalidPort(_))));
}

#[test]
fn from_env_requires_rover_api_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerConfigError::RoverApi(ConfigError::Missing)));
    assert!(err.to_string().contains("ROVER_API_BASE_URL"));
}

#[test]
fn from_env_normalizes_base_url_and_reads_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("ROVER_API_BASE_URL", "http://localhost:8080/marsrover/api/rovers/");
        std::env::set_var("PORT", "4000");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.rover_api.base_url(), "http://localhost:8080/marsrover/api/rovers");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_invalid_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("ROVER_API_BASE_URL", "ftp://example.test/rovers");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerConfigError::RoverApi(ConfigError::UnsupportedScheme(_))));

    unsafe { clear_server_env() };
}
