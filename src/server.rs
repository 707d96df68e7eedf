/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP surface of the status page
//!
//! - `GET /` renders the report, or answers `500` with the error text
//! - `GET /favicon.ico` is always `404`
//! - `GET /graph/{metric}` serves a history graph when metrics are enabled

use crate::application::config::Config;
use crate::application::interfaces::info::InfoService;
use crate::application::interfaces::metrics::MetricsSink;
use crate::application::services::info_service::InfoServiceImpl;
use crate::application::services::metrics_service::HttpMetricsSink;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::metric::Metric;
use crate::presentation::report::{Renderer, Report};
use crate::utils::id::request_id;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};

/// Shared, read-only state of the server
pub struct AppState {
    /// Startup configuration
    pub config: Arc<Config>,
    /// Account-info fetcher
    pub info: Arc<dyn InfoService>,
    /// Metrics backend, when enabled
    pub metrics: Option<Arc<dyn MetricsSink>>,
    /// Page renderer
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Wires the HTTP services and the renderer described by the configuration
    ///
    /// One HTTP client is shared by the fetcher and the metrics sink. Fails with
    /// [`AppError::Config`] when a configured URL does not parse.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        check_url("UPSTREAM_URL", &config.upstream.url)?;
        if let Some(metrics) = &config.metrics {
            check_url("METRICS_URL", &metrics.base_url)?;
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let info: Arc<dyn InfoService> =
            Arc::new(InfoServiceImpl::with_client(client.clone(), &config.upstream));
        let metrics = config.metrics.as_ref().map(|m| {
            Arc::new(HttpMetricsSink::with_client(client.clone(), m)) as Arc<dyn MetricsSink>
        });
        let renderer = match &config.template_path {
            Some(path) => Renderer::from_path(path)?,
            None => Renderer::new()?,
        };

        Ok(Self {
            config: Arc::new(config),
            info,
            metrics,
            renderer: Arc::new(renderer),
        })
    }
}

fn check_url(name: &str, value: &str) -> Result<(), AppError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| AppError::Config(format!("{name} {value:?} is not a valid URL: {e}")))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Builds the router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_status))
        .route("/favicon.ico", get(handle_not_found))
        .route("/graph/{metric}", get(handle_graph))
        .with_state(state)
}

/// Binds the configured port and serves until Ctrl-C
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let addr = state.config.server.address();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Fetches the line status and renders the page.
///
/// Metrics problems never fail the page: a failed upload is logged, a failed
/// graph leaves that image out.
pub async fn status_page(state: &AppState) -> Result<String, AppError> {
    let record = state
        .info
        .fetch_account_info(&state.config.credentials)
        .await
        .inspect_err(|e| error!("Unable to retrieve account info: {}", e))?;

    let mut report = Report::new(record);

    if let Some(metrics) = &state.metrics {
        if let Err(e) = metrics.record(&report.info).await {
            warn!("Failed to record metrics: {}", e);
        }
        report.upload_image = graph_base64(&**metrics, Metric::Upload).await;
        report.download_image = graph_base64(&**metrics, Metric::Download).await;
    }

    info!(
        upload_rx = %report.info.rx_rate,
        download_tx = %report.info.tx_rate,
        tx_rate_adjusted = %report.info.tx_rate_adjusted,
        "info"
    );

    state
        .renderer
        .render(&report)
        .inspect_err(|e| error!("Unable to render template: {}", e))
}

async fn graph_base64(metrics: &dyn MetricsSink, metric: Metric) -> Option<String> {
    match metrics.graph(metric).await {
        Ok(png) => Some(BASE64.encode(png)),
        Err(e) => {
            warn!("Failed to retrieve {} graph: {}", metric, e);
            None
        }
    }
}

async fn handle_status(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let span = info_span!("status", request_id = %request_id());
    status_page(&state).instrument(span).await.map(Html)
}

async fn handle_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn handle_graph(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
) -> Response {
    let Some(metrics) = &state.metrics else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Ok(metric) = metric.parse::<Metric>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let span = info_span!("graph", request_id = %request_id(), metric = %metric);
    match metrics.graph(metric).instrument(span).await {
        Ok(png) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Err(e) => {
            error!("Failed to retrieve {} graph: {}", metric, e);
            e.into_response()
        }
    }
}
