use metrics::Label;

use crate::telemetry::{LABEL_OPERATION, LABEL_SERVICE, LABEL_STATUS_CODE};

/// Dimensions shared by every instrument. Built fresh for each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLabels<'a> {
    pub service: &'a str,
    pub operation: &'a str,
    pub status_code: i32,
}

impl<'a> RequestLabels<'a> {
    pub fn new(service: &'a str, operation: &'a str, status_code: i32) -> Self {
        Self {
            service,
            operation,
            status_code,
        }
    }

    pub fn to_labels(&self) -> Vec<Label> {
        vec![
            Label::new(LABEL_SERVICE, self.service.to_owned()),
            Label::new(LABEL_OPERATION, self.operation.to_owned()),
            Label::new(LABEL_STATUS_CODE, self.status_code.to_string()),
        ]
    }
}
