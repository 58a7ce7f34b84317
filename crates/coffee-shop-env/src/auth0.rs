//! Auth0 URLs derived from the environment's identity-provider settings
//!
//! The client uses the implicit flow: the browser is sent to the tenant's
//! `/authorize` endpoint and comes back to `callbackURL` with the access
//! token in the fragment. Only the URLs are built here.

use crate::environment::Auth0Settings;
use crate::error::{ConfigurationError, Result};
use crate::validation::{
    require_absolute_url, require_non_empty, FIELD_AUTH0_AUDIENCE, FIELD_AUTH0_CALLBACK_URL,
    FIELD_AUTH0_CLIENT_ID, FIELD_AUTH0_URL,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, CsrfToken, RedirectUrl};
use tracing::debug;
use url::Url;

/// Suffix appended to a bare tenant prefix
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Expand the configured domain prefix into the tenant's host name
///
/// `cheermoon` becomes `cheermoon.auth0.com`; a value that already contains
/// a dot is taken as the full domain. Scheme and trailing slash are dropped.
/// What remains must be a bare host name.
pub fn auth0_domain(prefix: &str) -> Result<String> {
    let stripped = prefix
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let stripped = require_non_empty(FIELD_AUTH0_URL, stripped)?;

    if stripped.starts_with('.') || stripped.ends_with('.') || stripped.contains("..") {
        return Err(ConfigurationError::invalid_url(
            FIELD_AUTH0_URL,
            format!("'{prefix}' has an empty domain label"),
        ));
    }

    let domain = if stripped.contains('.') {
        stripped.to_string()
    } else {
        format!("{stripped}.{AUTH0_DOMAIN_SUFFIX}")
    };

    let parsed = Url::parse(&format!("https://{domain}/"))
        .map_err(|e| ConfigurationError::invalid_url(FIELD_AUTH0_URL, e))?;
    match parsed.host_str() {
        Some(host) if host.eq_ignore_ascii_case(&domain) => Ok(domain),
        _ => Err(ConfigurationError::invalid_url(
            FIELD_AUTH0_URL,
            format!("'{prefix}' is not a bare host name"),
        )),
    }
}

/// Identity-provider consumer of [`Auth0Settings`]
#[derive(Debug, Clone)]
pub struct Auth0Client {
    domain: String,
    audience: String,
    client: BasicClient,
}

impl Auth0Client {
    pub fn new(settings: &Auth0Settings) -> Result<Self> {
        let domain = auth0_domain(&settings.url)?;
        let audience = require_non_empty(FIELD_AUTH0_AUDIENCE, &settings.audience)?;
        let client_id = require_non_empty(FIELD_AUTH0_CLIENT_ID, &settings.client_id)?;
        require_absolute_url(FIELD_AUTH0_CALLBACK_URL, &settings.callback_url)?;

        debug!("Auth0 client {} on tenant {}", client_id, domain);

        let auth_url = AuthUrl::new(format!("https://{domain}/authorize"))
            .map_err(|e| ConfigurationError::invalid_url(FIELD_AUTH0_URL, e))?;
        // The registered value must match byte for byte, so the raw string is kept
        let redirect_url = RedirectUrl::new(settings.callback_url.clone())
            .map_err(|e| ConfigurationError::invalid_url(FIELD_AUTH0_CALLBACK_URL, e))?;

        // Public client: no secret, no token endpoint
        let client = BasicClient::new(ClientId::new(client_id.to_string()), None, auth_url, None)
            .set_redirect_uri(redirect_url);

        Ok(Self {
            domain,
            audience: audience.to_string(),
            client,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Authorization redirect with a freshly generated state parameter
    pub fn authorize_url(&self) -> (Url, CsrfToken) {
        self.build_authorize_url(CsrfToken::new_random)
    }

    /// Authorization redirect carrying the caller's state parameter
    pub fn authorize_url_with_state(&self, state: &str) -> Url {
        let state = state.to_string();
        self.build_authorize_url(move || CsrfToken::new(state)).0
    }

    fn build_authorize_url<S>(&self, state_fn: S) -> (Url, CsrfToken)
    where
        S: FnOnce() -> CsrfToken,
    {
        let (url, state) = self
            .client
            .authorize_url(state_fn)
            .use_implicit_flow()
            .add_extra_param("audience", self.audience.as_str())
            .url();

        debug!("Built authorize URL for {}", self.domain);
        (url, state)
    }

    /// Token issuer, as found in the `iss` claim
    pub fn issuer_url(&self) -> Result<Url> {
        Url::parse(&format!("https://{}/", self.domain))
            .map_err(|e| ConfigurationError::invalid_url(FIELD_AUTH0_URL, e))
    }

    /// Signing keys of the tenant
    pub fn jwks_url(&self) -> Result<Url> {
        self.issuer_url()?
            .join(".well-known/jwks.json")
            .map_err(|e| ConfigurationError::invalid_url(FIELD_AUTH0_URL, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnvironmentConfig;
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_domain_expansion() {
        assert_eq!(auth0_domain("cheermoon").unwrap(), "cheermoon.auth0.com");
        assert_eq!(
            auth0_domain("cheermoon.eu.auth0.com").unwrap(),
            "cheermoon.eu.auth0.com"
        );
        assert_eq!(
            auth0_domain("https://cheermoon.auth0.com/").unwrap(),
            "cheermoon.auth0.com"
        );
    }

    #[test]
    fn test_empty_domain_labels_rejected() {
        for prefix in ["https://", "/", "", ".auth0.com", "cheermoon.", "cheer..moon"] {
            let err = auth0_domain(prefix).unwrap_err();
            assert_eq!(err.field(), Some(FIELD_AUTH0_URL), "prefix {prefix:?}");
        }
        assert!(auth0_domain("cheermoon.auth0.com/tenant").is_err());

        let mut settings = EnvironmentConfig::development().auth0;
        settings.url = "https://".to_string();
        let err = Auth0Client::new(&settings).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_AUTH0_URL));
    }

    #[test]
    fn test_authorize_url_parameters() {
        let config = EnvironmentConfig::development();
        let client = Auth0Client::new(&config.auth0).unwrap();

        let url = client.authorize_url_with_state("xyz");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("cheermoon.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let params = query(&url);
        assert_eq!(params["response_type"], "token");
        assert_eq!(params["client_id"], "L3p1j1Q7VH5RHbJZiI39532zLPC7ZZnv");
        assert_eq!(params["redirect_uri"], "http://localhost:8100");
        assert_eq!(params["audience"], "COFFEE_SHOP");
        assert_eq!(params["state"], "xyz");
    }

    #[test]
    fn test_random_state_returned() {
        let client = Auth0Client::new(&EnvironmentConfig::production().auth0).unwrap();

        let (url, state) = client.authorize_url();
        assert_eq!(query(&url)["state"], *state.secret());
        assert_eq!(query(&url)["redirect_uri"], "https://coffeeshop.cheermoon.dev");
    }

    #[test]
    fn test_tenant_urls() {
        let client = Auth0Client::new(&EnvironmentConfig::development().auth0).unwrap();

        assert_eq!(client.issuer_url().unwrap().as_str(), "https://cheermoon.auth0.com/");
        assert_eq!(
            client.jwks_url().unwrap().as_str(),
            "https://cheermoon.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_missing_client_id_rejected() {
        let mut settings = EnvironmentConfig::development().auth0;
        settings.client_id = String::new();

        let err = Auth0Client::new(&settings).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_AUTH0_CLIENT_ID));
    }

    #[test]
    fn test_relative_callback_rejected() {
        let mut settings = EnvironmentConfig::development().auth0;
        settings.callback_url = "localhost:8100".to_string();

        let err = Auth0Client::new(&settings).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_AUTH0_CALLBACK_URL));
    }

    #[test]
    fn test_padded_callback_never_sent() {
        let mut settings = EnvironmentConfig::development().auth0;
        settings.callback_url = " http://localhost:8100 ".to_string();

        let err = Auth0Client::new(&settings).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_AUTH0_CALLBACK_URL));
    }
}
