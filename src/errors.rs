//! Error types for prompt generation, history persistence and exports

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// A non-fatal persistence problem. The session keeps its in-memory state;
/// the most recent changes may be missing after a restart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation}: {message}")]
pub struct PersistenceWarning {
    pub operation: PersistenceOperation,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceOperation {
    #[error("stored data could not be read, starting empty")]
    Read,

    #[error("stored data could not be written, changes kept for this session only")]
    Write,
}

impl PersistenceWarning {
    pub fn read(message: impl Into<String>) -> Self {
        Self {
            operation: PersistenceOperation::Read,
            message: message.into(),
        }
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self {
            operation: PersistenceOperation::Write,
            message: message.into(),
        }
    }
}

/// A value paired with an optional persistence warning.
#[derive(Debug, Clone)]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<PersistenceWarning>,
}

impl<T> Persisted<T> {
    pub fn clean(value: T) -> Self {
        Self { value, warning: None }
    }

    pub fn degraded(value: T, warning: PersistenceWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    #[cfg(test)]
    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display_mentions_operation() {
        let read = PersistenceWarning::read("bad json");
        assert!(read.to_string().contains("could not be read"));
        assert!(read.to_string().contains("bad json"));

        let write = PersistenceWarning::write("quota exceeded");
        assert_eq!(
            write.to_string(),
            "stored data could not be written, changes kept for this session only: quota exceeded"
        );
    }

    #[test]
    fn test_persisted_flags() {
        assert!(!Persisted::clean(1).is_degraded());
        assert!(Persisted::degraded(1, PersistenceWarning::write("x")).is_degraded());
    }

    #[test]
    fn test_validation_message() {
        let err = PromptError::Validation("name must not be empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: name must not be empty");
    }
}
