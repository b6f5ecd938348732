//! Configuration error taxonomy.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// One or more fields failed validation after extraction.
    #[error("Invalid configuration:\n{}", render_field_errors(.0))]
    Validation(#[source] ValidationErrors),

    /// Figment failed to read, merge, or deserialize the layered sources.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

fn render_field_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (field, errors) in errors.field_errors() {
        for error in errors {
            let reason = error
                .message
                .as_deref()
                .map_or_else(|| error.code.to_string(), str::to_owned);
            let _ = writeln!(out, "  {field}: {reason}");
        }
    }
    out
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
