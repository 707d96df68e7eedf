/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # line-status Prelude
//!
//! Convenient imports for the most commonly used types of the crate.
//!
//! ## Usage
//!
//! ```rust
//! use line_status::prelude::*;
//!
//! assert_eq!(format_rate("100000000"), "100.00 Mb/s");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration types
pub use crate::application::config::{
    Config, Credentials, MetricsConfig, ServerConfig, UpstreamConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, FetchError};

// ============================================================================
// SERVICES
// ============================================================================

/// Account-info fetcher trait
pub use crate::application::interfaces::info::InfoService;

/// Metrics backend trait
pub use crate::application::interfaces::metrics::MetricsSink;

/// Account-info fetcher implementation and its extraction step
pub use crate::application::services::info_service::{InfoServiceImpl, extract_record};

/// HTTP metrics backend implementation
pub use crate::application::services::metrics_service::HttpMetricsSink;

// ============================================================================
// MODELS
// ============================================================================

/// Upstream wire models
pub use crate::model::requests::InfoRequest;
pub use crate::model::responses::InfoResponse;

/// Rate series
pub use crate::model::metric::Metric;

/// Line status record
pub use crate::presentation::account::AccountRecord;

// ============================================================================
// PRESENTATION AND SERVER
// ============================================================================

/// Unit formatting helpers
pub use crate::presentation::format::{format_quota, format_rate};

/// Page rendering
pub use crate::presentation::report::{Renderer, Report};

/// HTTP server
pub use crate::server::{AppState, router, serve, status_page};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
