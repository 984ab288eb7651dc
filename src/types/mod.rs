//! Public types shared by the pipeline and the publisher.

mod labels;
mod metric_data;

pub use labels::RequestLabels;
pub use metric_data::{AttemptMetrics, MetricData, NO_RESPONSE_STATUS};

pub(crate) use metric_data::duration_millis;
