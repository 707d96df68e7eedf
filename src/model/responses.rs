/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::FetchError;
use crate::model::requests::InfoRequest;
use crate::presentation::account::AccountRecord;
use crate::presentation::serialization::{lenient_string, null_as_default};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Envelope returned by the account-info API
///
/// Every field defaults when absent or `null` and unknown fields are ignored. Upstream
/// reports failures through `error` and an empty `info` list while still
/// answering `200 OK`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoResponse {
    /// API subsystem that served the call
    #[serde(default, deserialize_with = "lenient_string")]
    pub subsystem: String,
    /// API command that served the call
    #[serde(default, deserialize_with = "lenient_string")]
    pub command: String,
    /// Echo of the login request
    #[serde(default)]
    pub request: Option<InfoRequest>,
    /// Configurable options block, kept opaque
    #[serde(default)]
    pub options: Value,
    /// Matching lines; one for a single-line login
    #[serde(default, rename = "info", deserialize_with = "null_as_default")]
    pub infos: Vec<AccountRecord>,
    /// Failure description, empty on success
    #[serde(default)]
    pub error: Option<String>,
}

impl InfoResponse {
    /// Upstream error text, empty when none was given
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default().trim()
    }

    /// Takes the first record of the envelope.
    ///
    /// An empty `info` list is a [`FetchError::NoRecord`] carrying the upstream
    /// error text. Extra records are ignored.
    pub fn into_record(self) -> Result<AccountRecord, FetchError> {
        let message = self.error_message().to_string();
        match self.infos.into_iter().next() {
            Some(record) => {
                if !message.is_empty() {
                    warn!("Upstream returned a record along with error: {}", message);
                }
                Ok(record)
            }
            None => Err(FetchError::NoRecord(message)),
        }
    }
}
