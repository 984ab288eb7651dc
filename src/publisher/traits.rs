//! Hook trait the request pipeline calls on completion.

use crate::Result;
use crate::types::MetricData;

/// Receives telemetry from the request pipeline.
///
/// The pipeline calls exactly one of these per logical request, on the task
/// that completed it. Implementations must not block.
pub trait MetricPublisher: Send + Sync {
    /// Called after every non-streaming request, with one entry in
    /// `data.attempts` per network attempt.
    fn post_request_metrics(&self, data: &MetricData) -> Result<()>;

    /// Called after a streaming operation completes.
    fn post_stream_metrics(&self, data: &MetricData) -> Result<()>;
}
