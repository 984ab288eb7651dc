//! Publisher configuration.
//!
//! Usually left at its defaults. When an application wants the instruments
//! under its own prefix it can load a TOML table such as:
//!
//! ```toml
//! namespace = "aws_sdk"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::telemetry::{DEFAULT_NAMESPACE, MetricNames};
use crate::{Error, Result};

/// Publisher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublisherConfig {
    /// Prefix for every metric name (default: `sdk`).
    pub namespace: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl PublisherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            Error::Configuration(format!("Failed to parse publisher config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read publisher config {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the namespace is a valid metric name prefix
    /// (`[a-zA-Z_][a-zA-Z0-9_]*`).
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.namespace.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if !valid {
            return Err(Error::Configuration(format!(
                "invalid metric namespace '{}': must match [a-zA-Z_][a-zA-Z0-9_]*",
                self.namespace
            )));
        }
        Ok(())
    }

    pub(crate) fn metric_names(&self) -> MetricNames {
        MetricNames::new(&self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_sdk_namespace() {
        let config = PublisherConfig::default();
        assert_eq!(config.namespace, "sdk");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_empty_config_keeps_defaults() {
        let config = PublisherConfig::from_toml_str("").unwrap();
        assert_eq!(config, PublisherConfig::default());
    }

    #[test]
    fn parse_namespace() {
        let config = PublisherConfig::from_toml_str(r#"namespace = "aws_sdk""#).unwrap();
        assert_eq!(config.namespace, "aws_sdk");
        assert_eq!(config.metric_names().request_total, "aws_sdk_request_total");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = PublisherConfig::from_toml_str(r#"prefix = "x""#).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn rejects_invalid_namespaces() {
        for ns in ["", "1sdk", "sdk-client", "sdk client", "sdk:"] {
            let result = PublisherConfig::new().namespace(ns).validate();
            assert!(result.is_err(), "namespace {ns:?} should be rejected");
        }
    }

    #[test]
    fn accepts_underscore_prefix() {
        assert!(PublisherConfig::new().namespace("_internal2").validate().is_ok());
    }
}
