/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use tracing::debug;

/// Status and fully read body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// Response status
    pub status: StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Body as lossy UTF-8, for log lines
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one HTTP request and reads the whole response body.
///
/// No status interpretation happens here: callers decide what counts as success,
/// which matters for upstreams that answer `200 OK` on failure. There is no retry
/// and no timeout beyond the client's own configuration.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples, applied first
/// * `query` - Optional query parameters
/// * `body` - Optional body, serialized as JSON. A `Content-Type` passed in
///   `headers` is kept; otherwise `application/json` is set
///
/// # Returns
///
/// * `Ok(HttpReply)` - Whatever the server answered
/// * `Err(reqwest::Error)` - Connection failure, body serialization or body read failure
///
/// # Example
///
/// ```ignore
/// let reply = make_http_request(
///     &client,
///     Method::POST,
///     "https://chaos2.aa.net.uk/broadband/info",
///     vec![("Content-Type", "application/json; charset=utf-8")],
///     None::<&()>,
///     Some(&request),
/// ).await?;
/// ```
pub async fn make_http_request<Q: Serialize, B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: Option<&Q>,
    body: Option<&B>,
) -> Result<HttpReply, reqwest::Error> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(q) = query {
        request = request.query(q);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.bytes().await?.to_vec();
    Ok(HttpReply { status, body })
}
