/// Account-info endpoint of the broadband provider
pub const DEFAULT_UPSTREAM_URL: &str = "https://chaos2.aa.net.uk/broadband/info";
/// Content type the upstream expects on the login request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
/// User agent string used in outbound HTTP requests
pub const USER_AGENT: &str = "line-status/0.1.0";
/// Port the status page listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;
/// Namespace metric data points are recorded under
pub const DEFAULT_METRICS_NAMESPACE: &str = "prazespeed";
/// Unit attached to recorded rate data points
pub const RATE_UNIT: &str = "Bits/Second";
/// Aggregation period of the history graphs, in seconds
pub const GRAPH_PERIOD_SECS: u64 = 3600;
/// Statistic plotted in the history graphs
pub const GRAPH_STAT: &str = "Minimum";
/// ISO 8601 look-back window of the history graphs (ten months)
pub const GRAPH_START: &str = "-P10M";
/// Bits per second in one megabit per second
pub const BITS_PER_MEGABIT: f64 = 1_000_000.0;
/// Bytes in one (decimal) gigabyte
pub const BYTES_PER_GIGABYTE: i64 = 1_000_000_000;
/// Length of the id attached to each inbound request
pub const REQUEST_ID_LENGTH: usize = 12;
