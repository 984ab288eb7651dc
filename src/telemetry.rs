//! Metric names and label keys.
//!
//! Every instrument name is `<namespace>_<suffix>`. The default namespace is
//! [`DEFAULT_NAMESPACE`], giving e.g. `sdk_request_total`.
//!
//! # Metric naming conventions
//!
//! Counters end in `_total`, latency histograms carry their unit
//! (`_milliseconds`).
//!
//! # Labels
//!
//! - `service` — SDK service identifier (e.g. "S3", "DynamoDB")
//! - `operation` — operation name (e.g. "GetObject")
//! - `status_code` — HTTP status code, `-1` when no response was received

/// Namespace used when no [`PublisherConfig`](crate::PublisherConfig) is given.
pub const DEFAULT_NAMESPACE: &str = "sdk";

/// Total logical requests, one per completed operation or stream.
///
/// Labels: `service`, `operation`, `status_code` (final).
pub const REQUEST_TOTAL: &str = "request_total";

/// End-to-end API call latency in milliseconds, retries included.
///
/// Labels: `service`, `operation`, `status_code` (final).
pub const REQUEST_LATENCY_MILLISECONDS: &str = "request_latency_milliseconds";

/// Distribution of retries per logical request.
///
/// Labels: `service`, `operation`, `status_code` (final).
pub const REQUEST_RETRY_COUNT: &str = "request_retry_count";

/// Total network attempts.
///
/// Labels: `service`, `operation`, `status_code` (of the attempt).
pub const REQUEST_ATTEMPT_TOTAL: &str = "request_attempt_total";

/// Per-attempt service call latency in milliseconds.
///
/// Values are truncated whole milliseconds, not nanoseconds. Dashboards built
/// on nanosecond attempt latency need rescaling.
///
/// Labels: `service`, `operation`, `status_code` (final, not the attempt's).
pub const REQUEST_ATTEMPT_LATENCY_MILLISECONDS: &str = "request_attempt_latency_milliseconds";

pub const LABEL_SERVICE: &str = "service";
pub const LABEL_OPERATION: &str = "operation";
pub const LABEL_STATUS_CODE: &str = "status_code";

/// Fully qualified instrument names for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricNames {
    pub request_total: String,
    pub request_latency: String,
    pub retry_count: String,
    pub attempt_total: String,
    pub attempt_latency: String,
}

impl MetricNames {
    /// Prefix every instrument with `namespace`.
    pub fn new(namespace: &str) -> Self {
        let name = |suffix: &str| format!("{namespace}_{suffix}");
        Self {
            request_total: name(REQUEST_TOTAL),
            request_latency: name(REQUEST_LATENCY_MILLISECONDS),
            retry_count: name(REQUEST_RETRY_COUNT),
            attempt_total: name(REQUEST_ATTEMPT_TOTAL),
            attempt_latency: name(REQUEST_ATTEMPT_LATENCY_MILLISECONDS),
        }
    }
}

impl Default for MetricNames {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
