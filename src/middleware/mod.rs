//! Client configuration and the stack it builds.
//!
//! A [`ClientConfig`] carries an ordered list of [`ApiOption`]s. Each client
//! built from the config creates a fresh [`Stack`] per operation and applies
//! every option to it, so an option appended once reaches every operation of
//! every client sharing that config.

mod stack;

use std::fmt;
use std::sync::Arc;

pub use stack::Stack;

use crate::Result;
use crate::publisher::MetricPublisher;

/// Id under which [`with_metric_middleware`] installs its step.
pub const METRICS_STEP_ID: &str = "SdkMetricsPublisher";

/// Mutates a stack when a client prepares an operation.
pub type ApiOption = Arc<dyn Fn(&mut Stack) -> Result<()> + Send + Sync>;

/// Client configuration shared by every client built from it.
#[derive(Clone, Default)]
pub struct ClientConfig {
    pub api_options: Vec<ApiOption>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option to run after the existing ones.
    pub fn api_option(mut self, option: ApiOption) -> Self {
        self.api_options.push(option);
        self
    }

    /// Build the stack for one operation by applying every option in order.
    pub fn build_stack(&self, stack_id: impl Into<String>) -> Result<Stack> {
        let mut stack = Stack::new(stack_id);
        for option in &self.api_options {
            option(&mut stack)?;
        }
        Ok(stack)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_options", &self.api_options.len())
            .finish()
    }
}

/// Option that adds `publisher` to a stack under [`METRICS_STEP_ID`].
pub fn with_metric_middleware(publisher: Arc<dyn MetricPublisher>) -> ApiOption {
    Arc::new(move |stack: &mut Stack| stack.add(METRICS_STEP_ID, publisher.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricData;

    struct Noop;

    impl MetricPublisher for Noop {
        fn post_request_metrics(&self, _data: &MetricData) -> Result<()> {
            Ok(())
        }

        fn post_stream_metrics(&self, _data: &MetricData) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn empty_config_builds_empty_stack() {
        let stack = ClientConfig::new().build_stack("S3.GetObject").unwrap();
        assert_eq!(stack.id(), "S3.GetObject");
        assert!(stack.is_empty());
    }

    #[test]
    fn metric_middleware_installs_named_step() {
        let config = ClientConfig::new().api_option(with_metric_middleware(Arc::new(Noop)));
        let stack = config.build_stack("S3.GetObject").unwrap();
        assert!(stack.contains(METRICS_STEP_ID));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn each_build_gets_a_fresh_stack() {
        let config = ClientConfig::new().api_option(with_metric_middleware(Arc::new(Noop)));
        assert_eq!(config.build_stack("a").unwrap().len(), 1);
        assert_eq!(config.build_stack("b").unwrap().len(), 1);
    }

    #[test]
    fn debug_shows_option_count() {
        let config = ClientConfig::new().api_option(with_metric_middleware(Arc::new(Noop)));
        assert_eq!(format!("{config:?}"), "ClientConfig { api_options: 1 }");
    }
}
