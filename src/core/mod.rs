use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::services::SupplicantError;

/// Errors raised by the application layer.
///
/// Covers configuration loading and anything the client library reports
/// while the CLI is running.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Error reported by the wpa_supplicant client
    #[error(transparent)]
    Supplicant(#[from] SupplicantError),
}

/// A specialized `Result` type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        AppError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        AppError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_parse_without_path_uses_string_location() {
        let err = AppError::toml_parse("expected `=`", None);
        assert_eq!(
            err.to_string(),
            "failed to parse TOML at 'string': expected `=`"
        );
    }

    #[test]
    fn supplicant_errors_pass_through() {
        let err = AppError::from(SupplicantError::ScanFailed);
        assert_eq!(err.to_string(), "ScanDone signal received without success");
    }
}
