/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # line-status
//!
//! A small web status page for a broadband line. Each request to `/` queries the
//! provider's account-info API, optionally records the current rates in a metrics
//! backend, and renders an HTML report with transfer rates and quota.
//!
//! The interesting part is the fetch step: the upstream answers `200 OK` even when
//! the login fails, signalling the failure only inside the JSON body. See
//! [`application::services::info_service`] for how that is normalized into
//! [`error::FetchError`].
//!
//! ```ignore
//! use line_status::prelude::*;
//!
//! let config = Config::new();
//! let service = InfoServiceImpl::new(&config.upstream)?;
//! let record = service.fetch_account_info(&config.credentials).await?;
//! println!("{}", format_rate(&record.tx_rate));
//! ```

/// Configuration, service traits and their implementations
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models for the upstream API and the outbound HTTP helper
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Account record, unit formatting and page rendering
pub mod presentation;
/// HTTP server exposing the status page
pub mod server;
/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
