use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate series kept in the metrics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Customer to provider, upstream's `rx_rate`
    Upload,
    /// Provider to customer, upstream's `tx_rate`
    Download,
}

impl Metric {
    /// Both series, in page order
    pub const ALL: [Metric; 2] = [Metric::Upload, Metric::Download];

    /// Name of the series in the metrics backend and in the graph route
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Upload => "upload",
            Metric::Download => "download",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Metric::Upload),
            "download" => Ok(Metric::Download),
            other => Err(AppError::InvalidValue(format!("unknown metric: {other}"))),
        }
    }
}
