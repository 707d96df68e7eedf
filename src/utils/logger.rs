/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines, for local runs
    Text,
    /// One JSON object per line, for deployed stages
    Json,
}

impl LogFormat {
    /// JSON when `UP_STAGE` is set to anything non-empty, text otherwise
    pub fn from_env() -> Self {
        match env::var("UP_STAGE") {
            Ok(stage) if !stage.is_empty() => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The level comes from `LOGLEVEL` (default `info`) and the format from
/// [`LogFormat::from_env`]. Safe to call more than once; only the first call has
/// an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL").unwrap_or_else(|_| "info".to_string());
        let filter = EnvFilter::try_new(level.to_lowercase())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // a subscriber may already be installed
        let _ = match LogFormat::from_env() {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(false)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .try_init(),
        };
    });
}
