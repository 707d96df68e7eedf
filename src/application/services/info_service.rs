/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::{Credentials, UpstreamConfig};
use crate::application::interfaces::info::InfoService;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::{AppError, FetchError};
use crate::model::http::make_http_request;
use crate::model::requests::InfoRequest;
use crate::model::responses::InfoResponse;
use crate::presentation::account::AccountRecord;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, error, warn};

/// Account-info fetcher talking to the provider over HTTP
pub struct InfoServiceImpl {
    client: Client,
    url: String,
}

impl InfoServiceImpl {
    /// Creates a fetcher with its own HTTP client
    ///
    /// The client has no request timeout; a slow upstream is bounded only by the
    /// caller.
    pub fn new(upstream: &UpstreamConfig) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, upstream))
    }

    /// Creates a fetcher sharing an existing HTTP client
    pub fn with_client(client: Client, upstream: &UpstreamConfig) -> Self {
        Self {
            client,
            url: upstream.url.clone(),
        }
    }

    /// Endpoint this fetcher posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl InfoService for InfoServiceImpl {
    async fn fetch_account_info(
        &self,
        credentials: &Credentials,
    ) -> Result<AccountRecord, FetchError> {
        let request = InfoRequest::from(credentials);
        debug!("Requesting account info for {:?}", request);

        let reply = make_http_request(
            &self.client,
            Method::POST,
            &self.url,
            vec![("Content-Type", JSON_CONTENT_TYPE)],
            None::<&()>,
            Some(&request),
        )
        .await
        .map_err(|e| {
            error!("Failed to make POST request to {}: {}", self.url, e);
            FetchError::Transport(e)
        })?;

        if reply.status != StatusCode::OK {
            error!(
                "Account info request failed with status {}: {}",
                reply.status,
                reply.text()
            );
        }

        extract_record(reply.status, &reply.body)
    }
}

/// Turns an upstream reply into an account record.
///
/// Status `200` is required but not sufficient: the body must also decode as an
/// envelope holding at least one record. The first record wins.
///
/// # Arguments
/// * `status` - HTTP status of the reply
/// * `body` - Raw reply body
///
/// # Returns
/// * [`FetchError::TransportStatus`] for any status other than `200`
/// * [`FetchError::Decode`] when the body is not a JSON envelope
/// * [`FetchError::NoRecord`] when the envelope's `info` list is empty
pub fn extract_record(status: StatusCode, body: &[u8]) -> Result<AccountRecord, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::TransportStatus(status));
    }

    let response: InfoResponse = serde_json::from_slice(body)?;
    if response.infos.len() > 1 {
        debug!(
            "Upstream returned {} records, using the first",
            response.infos.len()
        );
    }

    response.into_record().inspect_err(|e| {
        warn!("Upstream returned no account record: {}", e);
    })
}
