/// Module containing environment variable helpers
pub mod config;
/// Module containing request id generation
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;
