/// Account-info fetcher interface
pub mod info;
/// Metrics backend interface
pub mod metrics;
