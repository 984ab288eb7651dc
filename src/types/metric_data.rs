//! Telemetry records handed over by the request pipeline.

use std::time::Duration;

/// Status code recorded when a request or attempt never got a response.
pub const NO_RESPONSE_STATUS: i32 = -1;

/// Telemetry for one logical request, produced by the pipeline when the
/// request completes.
///
/// ```rust
/// # use sdk_metrics_publisher::{AttemptMetrics, MetricData};
/// # use std::time::Duration;
/// let data = MetricData::new("S3", "GetObject")
///     .status_code(200)
///     .api_call_duration(Duration::from_millis(250))
///     .attempt(AttemptMetrics::new(503, Duration::from_millis(90)))
///     .attempt(AttemptMetrics::new(200, Duration::from_millis(120)));
///
/// assert_eq!(data.retry_count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricData {
    pub service_id: String,
    pub operation_name: String,
    /// Final status of the request after all retries.
    pub status_code: i32,
    /// Total call duration, all attempts and backoff included.
    pub api_call_duration: Duration,
    pub retry_count: u32,
    /// Attempts in the order they were made.
    pub attempts: Vec<AttemptMetrics>,
    retry_count_set: bool,
}

impl MetricData {
    pub fn new(service_id: impl Into<String>, operation_name: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            operation_name: operation_name.into(),
            status_code: NO_RESPONSE_STATUS,
            api_call_duration: Duration::ZERO,
            retry_count: 0,
            attempts: Vec::new(),
            retry_count_set: false,
        }
    }

    pub fn status_code(mut self, status: i32) -> Self {
        self.status_code = status;
        self
    }

    pub fn api_call_duration(mut self, duration: Duration) -> Self {
        self.api_call_duration = duration;
        self
    }

    /// Set the retry count reported by the pipeline. Once set, it is no
    /// longer derived from the attempt list.
    pub fn retry_count(mut self, retries: u32) -> Self {
        self.retry_count = retries;
        self.retry_count_set = true;
        self
    }

    /// Append an attempt. Unless [`retry_count()`](Self::retry_count) was
    /// called, every attempt after the first counts as a retry.
    pub fn attempt(mut self, attempt: AttemptMetrics) -> Self {
        self.attempts.push(attempt);
        if !self.retry_count_set {
            let retries = self.attempts.len().saturating_sub(1);
            self.retry_count = u32::try_from(retries).unwrap_or(u32::MAX);
        }
        self
    }
}

/// Telemetry for a single network attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptMetrics {
    pub status_code: i32,
    /// Time spent in the service call, excluding retry delay.
    pub service_call_duration: Duration,
}

impl AttemptMetrics {
    pub fn new(status_code: i32, service_call_duration: Duration) -> Self {
        Self {
            status_code,
            service_call_duration,
        }
    }
}

/// Whole milliseconds, truncated.
pub(crate) fn duration_millis(duration: Duration) -> f64 {
    duration.as_millis() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_response_and_no_attempts() {
        let data = MetricData::new("S3", "ListBuckets");
        assert_eq!(data.status_code, NO_RESPONSE_STATUS);
        assert_eq!(data.retry_count, 0);
        assert!(data.attempts.is_empty());
    }

    #[test]
    fn attempts_drive_retry_count() {
        let data = MetricData::new("S3", "PutObject")
            .attempt(AttemptMetrics::new(500, Duration::from_millis(5)))
            .attempt(AttemptMetrics::new(500, Duration::from_millis(5)))
            .attempt(AttemptMetrics::new(200, Duration::from_millis(5)));
        assert_eq!(data.retry_count, 2);
        assert_eq!(data.attempts[2].status_code, 200);
    }

    #[test]
    fn explicit_retry_count_survives_later_attempts() {
        let data = MetricData::new("S3", "GetObject")
            .retry_count(4)
            .attempt(AttemptMetrics::new(500, Duration::ZERO))
            .attempt(AttemptMetrics::new(200, Duration::ZERO));
        assert_eq!(data.retry_count, 4);
        assert_eq!(data.attempts.len(), 2);
    }

    #[test]
    fn explicit_retry_count_of_zero_is_kept() {
        let data = MetricData::new("S3", "GetObject")
            .retry_count(0)
            .attempt(AttemptMetrics::new(500, Duration::ZERO))
            .attempt(AttemptMetrics::new(200, Duration::ZERO));
        assert_eq!(data.retry_count, 0);
    }

    #[test]
    fn explicit_retry_count_wins_when_set_last() {
        let data = MetricData::new("S3", "PutObject")
            .attempt(AttemptMetrics::new(200, Duration::ZERO))
            .retry_count(4);
        assert_eq!(data.retry_count, 4);
    }

    #[test]
    fn millis_are_truncated() {
        assert_eq!(duration_millis(Duration::from_millis(250)), 250.0);
        assert_eq!(duration_millis(Duration::from_micros(1_999)), 1.0);
        assert_eq!(duration_millis(Duration::ZERO), 0.0);
    }
}
