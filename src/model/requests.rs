/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::{GRAPH_PERIOD_SECS, GRAPH_STAT, GRAPH_START, RATE_UNIT};
use crate::model::metric::Metric;
use crate::presentation::serialization::lenient_string;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login request body of the account-info API
///
/// Upstream echoes this object back inside its response, hence `Deserialize`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InfoRequest {
    /// Control panel login
    #[serde(default, deserialize_with = "lenient_string")]
    pub control_login: String,
    /// Control panel password
    #[serde(default, deserialize_with = "lenient_string")]
    pub control_password: String,
    /// Line or service identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: String,
}

impl From<&Credentials> for InfoRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            control_login: credentials.login.clone(),
            control_password: credentials.password.clone(),
            service: credentials.service.clone(),
        }
    }
}

impl fmt::Debug for InfoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoRequest")
            .field("control_login", &self.control_login)
            .field("control_password", &"***")
            .field("service", &self.service)
            .finish()
    }
}

/// One data point sent to the metrics backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDatum {
    /// Metric name, `upload` or `download`
    pub name: &'static str,
    /// Unit of `value`
    pub unit: &'static str,
    /// Measured value
    pub value: f64,
}

impl MetricDatum {
    /// Creates a rate data point in bits/second
    pub fn rate(metric: Metric, bits_per_second: f64) -> Self {
        Self {
            name: metric.as_str(),
            unit: RATE_UNIT,
            value: bits_per_second,
        }
    }
}

/// Body of a metrics upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PutMetricsRequest<'a> {
    /// Namespace the data points belong to
    pub namespace: &'a str,
    /// Data points
    pub metrics: Vec<MetricDatum>,
}

/// Query parameters of a history graph request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQuery<'a> {
    /// Namespace of the plotted metric
    pub namespace: &'a str,
    /// Plotted metric
    pub metric: &'static str,
    /// Aggregation period in seconds
    pub period: u64,
    /// Aggregation statistic
    pub stat: &'static str,
    /// ISO 8601 look-back window
    pub start: &'static str,
    /// Graph title
    pub title: String,
}

impl<'a> GraphQuery<'a> {
    /// Ten months of hourly minimums for one metric
    pub fn history(namespace: &'a str, metric: Metric) -> Self {
        Self {
            namespace,
            metric: metric.as_str(),
            period: GRAPH_PERIOD_SECS,
            stat: GRAPH_STAT,
            start: GRAPH_START,
            title: format!("{} speeds over 10 months", metric.as_str()),
        }
    }
}
