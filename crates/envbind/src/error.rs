//! Binding error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction.
///
/// Fields for which no source yields a value are not errors - they are
/// skipped and keep their prior value. Every variant here stops the whole
/// extraction; targets already mutated by earlier bindings are not rolled
/// back, so callers should treat a failed extraction as leaving their
/// configuration indeterminate.
#[derive(Error, Debug)]
pub enum BindError {
    /// The configured env file does not exist.
    #[error("env file not found: {path}")]
    EnvFileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The env file exists but could not be loaded.
    #[error("failed to load env file: {path}")]
    EnvFileLoad {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: dotenvy::Error,
    },

    /// A raw value could not be coerced into the destination field type.
    #[error("invalid value {value:?} for key {key}: expected {expected}")]
    Coercion {
        /// The lookup key that produced the value.
        key: String,
        /// The offending raw value.
        value: String,
        /// Description of the expected type.
        expected: &'static str,
    },
}

impl BindError {
    /// Create a new env-file-not-found error.
    pub fn env_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::EnvFileNotFound { path: path.into() }
    }

    /// Create a new env-file-load error.
    pub fn env_file_load(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        Self::EnvFileLoad {
            path: path.into(),
            source,
        }
    }

    /// Create a new coercion error.
    pub fn coercion(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Coercion {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_not_found_error() {
        let err = BindError::env_file_not_found("/etc/app/.env.prod");
        assert!(err.to_string().contains("/etc/app/.env.prod"));
    }

    #[test]
    fn test_coercion_error() {
        let err = BindError::coercion("GRPC_PORT", "not-a-number", "integer");
        let rendered = err.to_string();
        assert!(rendered.contains("GRPC_PORT"));
        assert!(rendered.contains("not-a-number"));
        assert!(rendered.contains("integer"));
    }
}
