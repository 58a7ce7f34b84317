//! Error types for the coffee-env CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment could not be loaded or failed a boundary check
    #[error(transparent)]
    Config(#[from] coffee_shop_env::ConfigurationError),

    /// Writing to the terminal failed
    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
