//! Metric publishers.
//!
//! [`MetricPublisher`] is the hook the request pipeline drives;
//! [`MetricsPublisher`] is the implementation that writes to a
//! `metrics` recorder.

mod recorder;
mod traits;

pub use recorder::{MetricsPublisher, SharedRecorder};
pub use traits::MetricPublisher;
