/// Module containing the account-info fetcher
pub mod info_service;
/// Module containing the HTTP metrics sink
pub mod metrics_service;

pub use crate::application::interfaces::info::*;
pub use crate::application::interfaces::metrics::*;
pub use info_service::*;
pub use metrics_service::*;
