//! Error types raised at the boundaries that consume an environment
//!
//! The configuration record itself never fails; these errors belong to the
//! collaborators that parse, load or interpret its fields.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors surfaced by consumers of [`crate::EnvironmentConfig`]
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A URL field could not be used as an absolute URL
    #[error("Invalid URL in '{field}': {details}")]
    InvalidUrl { field: String, details: String },

    /// A required identifier was empty
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Deployment file missing
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Deployment file extension not recognised
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Decoding from a transport format failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Encoding into a transport format failed
    #[error("Failed to serialize configuration: {details}")]
    SerializeError { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigurationError {
    pub(crate) fn invalid_url(field: &str, details: impl ToString) -> Self {
        Self::InvalidUrl {
            field: field.to_string(),
            details: details.to_string(),
        }
    }

    pub(crate) fn empty_field(field: &str) -> Self {
        Self::EmptyField {
            field: field.to_string(),
        }
    }

    /// Name of the offending field, when the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { field, .. } | Self::EmptyField { field } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Result alias for environment consumers
pub type Result<T> = std::result::Result<T, ConfigurationError>;
