//! Consumer-boundary checks for environment fields
//!
//! [`EnvironmentConfig`] never validates itself. Collaborators that depend on
//! a field being a well-formed URL or a non-empty identifier call these
//! helpers where they first use the value.

use crate::auth0::auth0_domain;
use crate::error::{ConfigurationError, Result};
use crate::EnvironmentConfig;
use tracing::debug;
use url::Url;

pub const FIELD_API_SERVER_URL: &str = "apiServerUrl";
pub const FIELD_AUTH0_URL: &str = "auth0.url";
pub const FIELD_AUTH0_AUDIENCE: &str = "auth0.audience";
pub const FIELD_AUTH0_CLIENT_ID: &str = "auth0.clientId";
pub const FIELD_AUTH0_CALLBACK_URL: &str = "auth0.callbackURL";

/// Parse `value` as an absolute URL that can serve as a base for paths
pub fn require_absolute_url(field: &str, value: &str) -> Result<Url> {
    if value != value.trim() {
        return Err(ConfigurationError::invalid_url(
            field,
            format!("'{value}' has surrounding whitespace"),
        ));
    }

    let url = Url::parse(value).map_err(|e| ConfigurationError::invalid_url(field, e))?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(ConfigurationError::invalid_url(
            field,
            format!("'{value}' is not a hierarchical URL with a host"),
        ));
    }

    Ok(url)
}

/// Reject empty or whitespace-only values
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::empty_field(field));
    }
    Ok(value)
}

/// Check every field invariant, reporting the first violation in field order
pub fn check(config: &EnvironmentConfig) -> Result<()> {
    debug!("Checking {} environment", config.environment());

    require_absolute_url(FIELD_API_SERVER_URL, &config.api_server_url)?;
    auth0_domain(&config.auth0.url)?;
    require_non_empty(FIELD_AUTH0_AUDIENCE, &config.auth0.audience)?;
    require_non_empty(FIELD_AUTH0_CLIENT_ID, &config.auth0.client_id)?;
    require_absolute_url(FIELD_AUTH0_CALLBACK_URL, &config.auth0.callback_url)?;

    Ok(())
}
