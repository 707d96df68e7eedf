use crate::error::AppError;
use crate::model::metric::Metric;
use crate::presentation::account::AccountRecord;
use async_trait::async_trait;

/// Interface for the optional metrics backend
#[async_trait]
pub trait MetricsSink: Send + Sync {
    /// Records the record's upload and download rates as data points
    ///
    /// Fails with [`AppError::InvalidValue`] when either rate is not a number.
    async fn record(&self, record: &AccountRecord) -> Result<(), AppError>;

    /// Fetches the PNG history graph of one rate series
    async fn graph(&self, metric: Metric) -> Result<Vec<u8>, AppError>;
}
