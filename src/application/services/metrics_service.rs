use crate::application::config::MetricsConfig;
use crate::application::interfaces::metrics::MetricsSink;
use crate::constants::{JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::http::make_http_request;
use crate::model::metric::Metric;
use crate::model::requests::{GraphQuery, MetricDatum, PutMetricsRequest};
use crate::presentation::account::AccountRecord;
use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, error, info};

/// Metrics sink posting data points to, and reading graphs from, an HTTP backend
pub struct HttpMetricsSink {
    client: Client,
    config: MetricsConfig,
}

impl HttpMetricsSink {
    /// Creates a sink with its own HTTP client
    pub fn new(config: &MetricsConfig) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a sink sharing an existing HTTP client
    pub fn with_client(client: Client, config: &MetricsConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MetricsSink for HttpMetricsSink {
    async fn record(&self, record: &AccountRecord) -> Result<(), AppError> {
        let upload = record.upload_bps().ok_or_else(|| {
            AppError::InvalidValue(format!(
                "upload rate {:?} is not a number, missing value?",
                record.rx_rate
            ))
        })?;
        let download = record.download_bps().ok_or_else(|| {
            AppError::InvalidValue(format!(
                "download rate {:?} is not a number, missing value?",
                record.tx_rate
            ))
        })?;

        let body = PutMetricsRequest {
            namespace: &self.config.namespace,
            metrics: vec![
                MetricDatum::rate(Metric::Upload, upload),
                MetricDatum::rate(Metric::Download, download),
            ],
        };

        let reply = make_http_request(
            &self.client,
            Method::POST,
            &self.endpoint("metrics"),
            vec![("Content-Type", JSON_CONTENT_TYPE)],
            None::<&()>,
            Some(&body),
        )
        .await?;

        if !reply.status.is_success() {
            error!(
                "Metrics upload failed with status {}: {}",
                reply.status,
                reply.text()
            );
            return Err(AppError::Unexpected(reply.status));
        }

        debug!("Recorded upload={} download={}", upload, download);
        Ok(())
    }

    async fn graph(&self, metric: Metric) -> Result<Vec<u8>, AppError> {
        info!(metric = %metric, "Creating plot");

        let query = GraphQuery::history(&self.config.namespace, metric);
        let reply = make_http_request(
            &self.client,
            Method::GET,
            &self.endpoint("graph"),
            vec![("Accept", "image/png")],
            Some(&query),
            None::<&()>,
        )
        .await?;

        if !reply.status.is_success() {
            error!(
                "Graph request for {} failed with status {}",
                metric, reply.status
            );
            return Err(AppError::Unexpected(reply.status));
        }
        if reply.body.is_empty() {
            return Err(AppError::InvalidValue(format!("empty {metric} graph")));
        }

        Ok(reply.body)
    }
}
