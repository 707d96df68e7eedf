use line_status::application::config::{
    Config, Credentials, MetricsConfig, ServerConfig, UpstreamConfig,
};
use line_status::error::AppError;
use line_status::server::AppState;
use line_status::constants::{DEFAULT_METRICS_NAMESPACE, DEFAULT_PORT, DEFAULT_UPSTREAM_URL};
use std::env;
use std::path::PathBuf;

// Single test: Config::new reads process-wide variables.
#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("LOGIN", "user@a");
        env::set_var("PASSWORD", "hunter2");
        env::set_var("SERVICE", "12345");
        env::set_var("PORT", "9090");
        env::set_var("UPSTREAM_URL", "http://127.0.0.1:1/broadband/info");
        env::set_var("METRICS_URL", "http://metrics.local/");
        env::remove_var("METRICS_NAMESPACE");
        env::set_var("TEMPLATE_PATH", "/srv/page.html");
    }

    let config = Config::new();
    assert_eq!(
        config.credentials,
        Credentials {
            login: "user@a".to_string(),
            password: "hunter2".to_string(),
            service: "12345".to_string(),
        }
    );
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.upstream.url, "http://127.0.0.1:1/broadband/info");
    let metrics = config.metrics.expect("metrics should be enabled");
    assert_eq!(metrics.base_url, "http://metrics.local");
    assert_eq!(metrics.namespace, DEFAULT_METRICS_NAMESPACE);
    assert_eq!(config.template_path, Some(PathBuf::from("/srv/page.html")));

    unsafe {
        env::remove_var("LOGIN");
        env::remove_var("PASSWORD");
        env::remove_var("SERVICE");
        env::set_var("PORT", "not-a-port");
        env::remove_var("UPSTREAM_URL");
        env::set_var("METRICS_URL", "  ");
        env::remove_var("TEMPLATE_PATH");
    }

    let config = Config::new();
    assert_eq!(config.credentials, Credentials::default());
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.upstream.url, DEFAULT_UPSTREAM_URL);
    assert!(config.metrics.is_none());
    assert!(config.template_path.is_none());

    unsafe {
        env::remove_var("PORT");
        env::remove_var("METRICS_URL");
    }
}

#[test]
fn test_credentials_debug_hides_password() {
    let credentials = Credentials {
        login: "user@a".to_string(),
        password: "hunter2".to_string(),
        service: "12345".to_string(),
    };
    let debug = format!("{credentials:?}");
    assert!(debug.contains("user@a"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_server_address_binds_all_interfaces() {
    let server = ServerConfig { port: 8081 };
    assert_eq!(server.address().to_string(), "0.0.0.0:8081");
}

#[test]
fn test_upstream_default_url() {
    assert_eq!(UpstreamConfig::default().url, DEFAULT_UPSTREAM_URL);
}

#[test]
fn test_app_state_rejects_invalid_upstream_url() {
    let config = Config {
        upstream: UpstreamConfig {
            url: "chaos2 broadband info".to_string(),
        },
        ..Default::default()
    };
    match AppState::from_config(config) {
        Err(AppError::Config(msg)) => assert!(msg.contains("UPSTREAM_URL")),
        Err(other) => panic!("Expected Config error, got {other:?}"),
        Ok(_) => panic!("Expected Config error"),
    }
}

#[test]
fn test_app_state_rejects_invalid_metrics_url() {
    let config = Config {
        metrics: Some(MetricsConfig {
            base_url: "metrics".to_string(),
            namespace: "prazespeed".to_string(),
        }),
        ..Default::default()
    };
    match AppState::from_config(config) {
        Err(AppError::Config(msg)) => assert!(msg.contains("METRICS_URL")),
        Err(other) => panic!("Expected Config error, got {other:?}"),
        Ok(_) => panic!("Expected Config error"),
    }
}

#[test]
fn test_app_state_without_metrics() {
    let state = AppState::from_config(Config::default()).unwrap();
    assert!(state.metrics.is_none());
    assert_eq!(state.config.upstream.url, DEFAULT_UPSTREAM_URL);
}
