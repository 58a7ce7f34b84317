//! Deployment environment configuration for the Coffee Shop client
//!
//! The development and production variants are pre-compiled into the binary.
//! Which one backs the process-wide instance is fixed at build time through
//! the `production` cargo feature.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Auth0 domain prefix of the Coffee Shop tenant
pub const AUTH0_DOMAIN_PREFIX: &str = "cheermoon";

/// Audience set for the Coffee Shop API
pub const AUTH0_AUDIENCE: &str = "COFFEE_SHOP";

/// Public client ID generated for the Coffee Shop application
pub const AUTH0_CLIENT_ID: &str = "L3p1j1Q7VH5RHbJZiI39532zLPC7ZZnv";

/// Local Flask API server
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Local Ionic application
pub const DEV_CALLBACK_URL: &str = "http://localhost:8100";

/// Deployed API server
pub const PROD_API_SERVER_URL: &str = "https://api.coffeeshop.cheermoon.dev";

/// Deployed client application
pub const PROD_CALLBACK_URL: &str = "https://coffeeshop.cheermoon.dev";

/// Environment bundled into this build
#[cfg(feature = "production")]
pub const ACTIVE_ENVIRONMENT: Environment = Environment::Production;

/// Environment bundled into this build
#[cfg(not(feature = "production"))]
pub const ACTIVE_ENVIRONMENT: Environment = Environment::Development;

static ENVIRONMENT: Lazy<EnvironmentConfig> = Lazy::new(|| {
    debug!("Initializing {} environment", ACTIVE_ENVIRONMENT);
    EnvironmentConfig::for_environment(ACTIVE_ENVIRONMENT)
});

/// Process-wide environment configuration
///
/// Every call returns the same instance; it is never mutated after the
/// first access.
pub fn environment() -> &'static EnvironmentConfig {
    &ENVIRONMENT
}

/// Named deployment variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "Unknown environment '{other}', expected 'development' or 'production'"
            )),
        }
    }
}

/// Environment-specific endpoints and identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Build-mode flag
    pub production: bool,

    /// Base URL of the backend API server
    pub api_server_url: String,

    /// Identity-provider settings
    pub auth0: Auth0Settings,
}

/// Auth0 settings of the client application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Settings {
    /// Auth0 domain prefix
    pub url: String,

    /// Audience set for the Auth0 API
    pub audience: String,

    /// Public client ID of the Auth0 application
    pub client_id: String,

    /// Base URL of the running client application, registered with Auth0
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Auth0Settings {
    fn coffee_shop(callback_url: &str) -> Self {
        Self {
            url: AUTH0_DOMAIN_PREFIX.to_string(),
            audience: AUTH0_AUDIENCE.to_string(),
            client_id: AUTH0_CLIENT_ID.to_string(),
            callback_url: callback_url.to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Local development variant
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth0: Auth0Settings::coffee_shop(DEV_CALLBACK_URL),
        }
    }

    /// Deployed production variant
    pub fn production() -> Self {
        Self {
            production: true,
            api_server_url: PROD_API_SERVER_URL.to_string(),
            auth0: Auth0Settings::coffee_shop(PROD_CALLBACK_URL),
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    /// Variant this configuration describes, derived from the build-mode flag
    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}
