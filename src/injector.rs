//! Wires a [`MetricsPublisher`] into a [`ClientConfig`].

use std::sync::Arc;

use tracing::debug;

use crate::config::PublisherConfig;
use crate::middleware::{ClientConfig, with_metric_middleware};
use crate::publisher::{MetricsPublisher, SharedRecorder};

/// Return `cfg` with one extra option that publishes request count totals,
/// latencies and retry counts to `recorder` for every operation of every
/// client built from it.
///
/// Call once per config. Applying it twice to the same config makes stack
/// construction fail with [`Error::DuplicateStep`](crate::Error::DuplicateStep).
/// Binding two configs to one recorder is allowed; their publishers share
/// series.
///
/// ```rust
/// # use std::sync::Arc;
/// # use metrics_util::debugging::DebuggingRecorder;
/// use sdk_metrics_publisher::{ClientConfig, with_metrics};
///
/// let recorder = Arc::new(DebuggingRecorder::new());
/// let cfg = with_metrics(ClientConfig::new(), recorder);
/// assert_eq!(cfg.api_options.len(), 1);
/// ```
pub fn with_metrics(cfg: ClientConfig, recorder: SharedRecorder) -> ClientConfig {
    inject(cfg, MetricsPublisher::new(recorder))
}

/// Like [`with_metrics`], with instrument names taken from `config`.
///
/// # Panics
///
/// Panics if `config` does not validate.
pub fn with_metrics_config(
    cfg: ClientConfig,
    recorder: SharedRecorder,
    config: &PublisherConfig,
) -> ClientConfig {
    inject(cfg, MetricsPublisher::with_config(recorder, config))
}

fn inject(mut cfg: ClientConfig, publisher: MetricsPublisher) -> ClientConfig {
    debug!(
        request_total = %publisher.names().request_total,
        existing_options = cfg.api_options.len(),
        "appending SDK metrics option"
    );
    cfg.api_options.push(with_metric_middleware(Arc::new(publisher)));
    cfg
}
