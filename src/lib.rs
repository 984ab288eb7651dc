//! sdk-metrics-publisher - SDK request telemetry for `metrics` recorders
//!
//! Bridges an SDK request pipeline to any [`metrics::Recorder`]. Every
//! completed request updates request totals, request latency and retry
//! count; every network attempt updates attempt totals and attempt latency.
//! See [`telemetry`] for the instrument names and labels.
//!
//! The recorder is passed in explicitly, so independent recorders can
//! coexist (e.g. one per test). Exposition is left to the recorder, for
//! example `metrics-exporter-prometheus`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! # use metrics_util::debugging::DebuggingRecorder;
//! use sdk_metrics_publisher::{AttemptMetrics, ClientConfig, MetricData, with_metrics};
//!
//! # fn main() -> sdk_metrics_publisher::Result<()> {
//! let recorder = Arc::new(DebuggingRecorder::new());
//! let cfg = with_metrics(ClientConfig::new(), recorder);
//!
//! // The SDK builds a stack per operation and reports on completion.
//! let stack = cfg.build_stack("S3.GetObject")?;
//! stack.publish_request(
//!     &MetricData::new("S3", "GetObject")
//!         .status_code(200)
//!         .api_call_duration(Duration::from_millis(120))
//!         .attempt(AttemptMetrics::new(200, Duration::from_millis(110))),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod injector;
pub mod middleware;
pub mod publisher;
pub mod telemetry;
pub mod types;

pub use config::PublisherConfig;
pub use error::{Error, Result};
pub use injector::{with_metrics, with_metrics_config};
pub use middleware::{ApiOption, ClientConfig, METRICS_STEP_ID, Stack, with_metric_middleware};
pub use publisher::{MetricPublisher, MetricsPublisher, SharedRecorder};
pub use types::{AttemptMetrics, MetricData, NO_RESPONSE_STATUS, RequestLabels};
