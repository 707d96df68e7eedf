/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Failure of a single account-info fetch
///
/// The upstream answers `200 OK` even when the login or the line lookup fails, so a
/// successful transport status alone is never treated as success. None of these
/// failures are retried.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the response body could not be read
    Transport(reqwest::Error),
    /// The upstream answered with a status other than `200`
    TransportStatus(StatusCode),
    /// The body decoded but carried no account record; holds the upstream `error` text
    NoRecord(String),
    /// The body is not a JSON envelope
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport error: {e}"),
            FetchError::TransportStatus(status) => {
                write!(f, "unexpected upstream status: {status}")
            }
            FetchError::NoRecord(message) if message.is_empty() => {
                write!(f, "no account record returned")
            }
            FetchError::NoRecord(message) => {
                write!(f, "no account record returned: {message}")
            }
            FetchError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            FetchError::TransportStatus(_) | FetchError::NoRecord(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}

/// Main error type for the crate
#[derive(Debug)]
pub enum AppError {
    /// Account-info fetch failed
    Fetch(FetchError),
    /// HTTP error talking to the metrics backend
    Http(reqwest::Error),
    /// Metrics backend answered with a non-success status
    Unexpected(StatusCode),
    /// Page template failed to load or render
    Template(minijinja::Error),
    /// A value could not be interpreted
    InvalidValue(String),
    /// Invalid configuration
    Config(String),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(e) => write!(f, "failed to retrieve account info: {e}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Template(e) => write!(f, "template error: {e}"),
            AppError::InvalidValue(msg) => write!(f, "invalid value: {msg}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch(e) => Some(e),
            AppError::Http(e) => Some(e),
            AppError::Template(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Unexpected(_) | AppError::InvalidValue(_) | AppError::Config(_) => None,
        }
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Fetch(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
