//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or persisting scaffolding
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid type for {owner}: {detail}")]
    InvalidParameterType { owner: String, detail: String },

    #[error("Name collision: two artifacts resolve to class name '{name}'")]
    NameCollision { name: String },

    #[error("Invalid {kind} identifier: '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Method name '{name}' is declared more than once")]
    DuplicateMethodName { name: String },

    #[error("Activity timeout must be at least one second, got {seconds}")]
    InvalidTimeout { seconds: u64 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    pub(crate) fn invalid_type(owner: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidParameterType {
            owner: owner.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    /// Whether retrying the whole generation run may succeed.
    ///
    /// Rendering is deterministic, so only persistence failures are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::FileWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_only_file_write_is_retryable() {
        let write = GenerationError::FileWrite {
            path: PathBuf::from("out/Foo.php"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(write.is_retryable());
        assert!(!GenerationError::NameCollision { name: "X".into() }.is_retryable());
        assert!(!GenerationError::invalid_type("handle", "empty").is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let error = GenerationError::invalid_identifier("method", "1abc");
        assert_eq!(error.to_string(), "Invalid method identifier: '1abc'");

        let error = GenerationError::FileWrite {
            path: PathBuf::from("out/Foo.php"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to write out/Foo.php: missing");
    }
}
