//! Ordered set of publisher steps for one client.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::publisher::MetricPublisher;
use crate::types::MetricData;
use crate::{Error, Result};

/// Steps the request pipeline notifies when a request or stream completes.
///
/// Step ids are unique within a stack; steps run in insertion order.
pub struct Stack {
    id: String,
    steps: Vec<(String, Arc<dyn MetricPublisher>)>,
}

impl Stack {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a step. Fails with [`Error::DuplicateStep`] if `id` is taken.
    pub fn add(&mut self, id: impl Into<String>, step: Arc<dyn MetricPublisher>) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            warn!(stack = %self.id, step = %id, "rejecting duplicate stack step");
            return Err(Error::DuplicateStep {
                stack: self.id.clone(),
                id,
            });
        }
        self.steps.push((id, step));
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.iter().any(|(existing, _)| existing == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step ids in run order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(id, _)| id.as_str())
    }

    /// Run every step's request hook, stopping at the first error.
    pub fn publish_request(&self, data: &MetricData) -> Result<()> {
        self.steps
            .iter()
            .try_for_each(|(_, step)| step.post_request_metrics(data))
    }

    /// Run every step's stream hook, stopping at the first error.
    pub fn publish_stream(&self, data: &MetricData) -> Result<()> {
        self.steps
            .iter()
            .try_for_each(|(_, step)| step.post_stream_metrics(data))
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("id", &self.id)
            .field("steps", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
