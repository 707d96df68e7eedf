use crate::application::config::Credentials;
use crate::error::FetchError;
use crate::presentation::account::AccountRecord;
use async_trait::async_trait;

/// Interface for the account-info fetcher
#[async_trait]
pub trait InfoService: Send + Sync {
    /// Fetches the status of the line the credentials belong to
    ///
    /// Issues exactly one request upstream. Empty credential values are sent as-is.
    ///
    /// # Returns
    /// * The first account record of the response
    /// * [`FetchError::NoRecord`] when the response carries none, even on `200 OK`
    async fn fetch_account_info(
        &self,
        credentials: &Credentials,
    ) -> Result<AccountRecord, FetchError>;
}
