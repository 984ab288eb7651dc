//! Error types

/// Errors surfaced while wiring the publisher into a client stack.
///
/// Publishing itself never fails; these only come out of stack construction
/// and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A step with the same id was already added to the stack. Usually means
    /// the metrics option was applied to one config twice.
    #[error("step '{id}' already exists in stack '{stack}'")]
    DuplicateStep { stack: String, id: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for publisher operations
pub type Result<T> = std::result::Result<T, Error>;
