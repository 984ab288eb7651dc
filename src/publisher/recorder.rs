//! [`MetricPublisher`] backed by a `metrics` recorder.

use std::fmt;
use std::sync::Arc;

use metrics::{Key, Level, Metadata, Recorder, Unit};
use tracing::{debug, trace};

use super::traits::MetricPublisher;
use crate::Result;
use crate::config::PublisherConfig;
use crate::telemetry::MetricNames;
use crate::types::{MetricData, RequestLabels, duration_millis};

/// Recorder handle shared between the caller and every publisher bound to it.
pub type SharedRecorder = Arc<dyn Recorder + Send + Sync>;

fn metadata() -> Metadata<'static> {
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()))
}

/// Publishes request and attempt telemetry to a recorder.
///
/// Construction describes the five instruments on the recorder. Recorders in
/// the `metrics` ecosystem treat repeated descriptions as a no-op, so two
/// publishers bound to one recorder silently share the same series; binding
/// a recorder once per process is the caller's job.
///
/// ```rust
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # use metrics_util::debugging::DebuggingRecorder;
/// use sdk_metrics_publisher::{MetricData, MetricPublisher, MetricsPublisher};
///
/// let recorder = Arc::new(DebuggingRecorder::new());
/// let publisher = MetricsPublisher::new(recorder);
///
/// let data = MetricData::new("S3", "GetObject")
///     .status_code(200)
///     .api_call_duration(Duration::from_millis(42));
/// publisher.post_request_metrics(&data).unwrap();
/// ```
#[derive(Clone)]
pub struct MetricsPublisher {
    recorder: SharedRecorder,
    names: MetricNames,
}

impl MetricsPublisher {
    /// Bind a publisher to `recorder` using the default namespace.
    pub fn new(recorder: SharedRecorder) -> Self {
        Self::bind(recorder, MetricNames::default())
    }

    /// Bind a publisher to `recorder` using the namespace from `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`PublisherConfig::validate`]. Metric names
    /// are fixed at setup time, so a bad namespace is a programming error.
    pub fn with_config(recorder: SharedRecorder, config: &PublisherConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("cannot register SDK metrics: {e}");
        }
        Self::bind(recorder, config.metric_names())
    }

    fn bind(recorder: SharedRecorder, names: MetricNames) -> Self {
        let publisher = Self { recorder, names };
        publisher.register();
        publisher
    }

    fn register(&self) {
        let names = &self.names;
        self.recorder.describe_counter(
            names.request_total.clone().into(),
            Some(Unit::Count),
            "Total number of SDK requests.".into(),
        );
        self.recorder.describe_histogram(
            names.request_latency.clone().into(),
            Some(Unit::Milliseconds),
            "Latency of SDK requests in milliseconds, retries included.".into(),
        );
        self.recorder.describe_histogram(
            names.retry_count.clone().into(),
            Some(Unit::Count),
            "Number of retries per SDK request.".into(),
        );
        self.recorder.describe_counter(
            names.attempt_total.clone().into(),
            Some(Unit::Count),
            "Total number of SDK request attempts.".into(),
        );
        self.recorder.describe_histogram(
            names.attempt_latency.clone().into(),
            Some(Unit::Milliseconds),
            "Latency of individual SDK request attempts in milliseconds.".into(),
        );
        debug!(
            request_total = %names.request_total,
            attempt_total = %names.attempt_total,
            "registered SDK metrics"
        );
    }

    /// The recorder this publisher writes to.
    pub fn recorder(&self) -> &SharedRecorder {
        &self.recorder
    }

    /// Instrument names in use.
    pub fn names(&self) -> &MetricNames {
        &self.names
    }

    fn increment(&self, name: &str, labels: RequestLabels<'_>) {
        let key = Key::from_parts(name.to_owned(), labels.to_labels());
        self.recorder.register_counter(&key, &metadata()).increment(1);
    }

    fn observe(&self, name: &str, labels: RequestLabels<'_>, value: f64) {
        let key = Key::from_parts(name.to_owned(), labels.to_labels());
        self.recorder.register_histogram(&key, &metadata()).record(value);
    }
}

impl MetricPublisher for MetricsPublisher {
    fn post_request_metrics(&self, data: &MetricData) -> Result<()> {
        let service = data.service_id.as_str();
        let operation = data.operation_name.as_str();
        let request = RequestLabels::new(service, operation, data.status_code);

        self.increment(&self.names.request_total, request);
        self.observe(
            &self.names.request_latency,
            request,
            duration_millis(data.api_call_duration),
        );
        self.observe(&self.names.retry_count, request, f64::from(data.retry_count));

        for attempt in &data.attempts {
            // Attempt totals split by the attempt's own status, attempt
            // latency by the request's final status.
            self.increment(
                &self.names.attempt_total,
                RequestLabels::new(service, operation, attempt.status_code),
            );
            self.observe(
                &self.names.attempt_latency,
                request,
                duration_millis(attempt.service_call_duration),
            );
        }

        trace!(
            service,
            operation,
            status_code = data.status_code,
            attempts = data.attempts.len(),
            "published request metrics"
        );
        Ok(())
    }

    fn post_stream_metrics(&self, data: &MetricData) -> Result<()> {
        let request = RequestLabels::new(&data.service_id, &data.operation_name, data.status_code);
        self.increment(&self.names.request_total, request);

        trace!(
            service = %data.service_id,
            operation = %data.operation_name,
            status_code = data.status_code,
            "published stream metrics"
        );
        Ok(())
    }
}

impl fmt::Debug for MetricsPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsPublisher")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
