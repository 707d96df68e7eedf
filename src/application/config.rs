use crate::constants::{DEFAULT_METRICS_NAMESPACE, DEFAULT_PORT, DEFAULT_UPSTREAM_URL};
use crate::utils::config::{get_credential, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Credentials forwarded to the account-info API
pub struct Credentials {
    /// Control panel login
    pub login: String,
    /// Control panel password
    pub password: String,
    /// Line or service identifier
    pub service: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .field("service", &self.service)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Where the account-info API lives
pub struct UpstreamConfig {
    /// Full URL of the account-info endpoint
    pub url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Listening side of the status page
pub struct ServerConfig {
    /// TCP port, bound on all interfaces
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind
    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Metrics backend receiving rate data points and serving history graphs
pub struct MetricsConfig {
    /// Base URL; `/metrics` and `/graph` are appended
    pub base_url: String,
    /// Namespace data points are recorded under
    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Main configuration, built once at startup and shared read-only
pub struct Config {
    /// Credentials for the account-info API
    pub credentials: Credentials,
    /// Account-info API location
    pub upstream: UpstreamConfig,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Metrics backend; `None` disables recording and graphs
    pub metrics: Option<MetricsConfig>,
    /// Page template to use instead of the built-in one
    pub template_path: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    ///
    /// Missing credentials are logged and left empty. `METRICS_URL` switches the
    /// metrics capability on.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let metrics = get_env_or_none::<String>("METRICS_URL").map(|base_url| MetricsConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace: get_env_or_default(
                "METRICS_NAMESPACE",
                DEFAULT_METRICS_NAMESPACE.to_string(),
            ),
        });
        match &metrics {
            Some(m) => info!("Metrics enabled: {} ({})", m.base_url, m.namespace),
            None => info!("Metrics disabled, METRICS_URL not set"),
        }

        Config {
            credentials: Credentials {
                login: get_credential("LOGIN"),
                password: get_credential("PASSWORD"),
                service: get_env_or_default("SERVICE", String::new()),
            },
            upstream: UpstreamConfig {
                url: get_env_or_default("UPSTREAM_URL", DEFAULT_UPSTREAM_URL.to_string()),
            },
            server: ServerConfig {
                port: get_env_or_default("PORT", DEFAULT_PORT),
            },
            metrics,
            template_path: get_env_or_none("TEMPLATE_PATH"),
        }
    }
}
