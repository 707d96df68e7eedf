/// Account record returned by the account-info API
pub mod account;
/// Rate and quota formatting helpers
pub mod format;
/// HTML page rendering
pub mod report;
/// Serialization utilities for API responses
pub mod serialization;
