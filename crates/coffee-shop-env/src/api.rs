//! Request URLs for the Coffee Shop API server
//!
//! `apiServerUrl` is the prefix of every outgoing request path.

use crate::error::{ConfigurationError, Result};
use crate::validation::{require_absolute_url, FIELD_API_SERVER_URL};
use crate::EnvironmentConfig;
use tracing::debug;
use url::Url;

pub const DRINKS_PATH: &str = "/drinks";
pub const DRINKS_DETAIL_PATH: &str = "/drinks-detail";

/// Base address of the backend, checked once when created
#[derive(Debug, Clone)]
pub struct ApiEndpoint {
    base: Url,
}

impl ApiEndpoint {
    pub fn new(config: &EnvironmentConfig) -> Result<Self> {
        Self::from_base_url(&config.api_server_url)
    }

    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let mut base = require_absolute_url(FIELD_API_SERVER_URL, base_url)?;

        // Url::join replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        debug!("API endpoint base: {}", base);
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Prefix `path` with the API base URL
    ///
    /// The result always stays under the base: absolute URLs and `..`
    /// segments that leave the base path are rejected.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        if Url::parse(path).is_ok() {
            return Err(ConfigurationError::invalid_url(
                "path",
                format!("'{path}' is an absolute URL, expected a request path"),
            ));
        }

        let url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConfigurationError::invalid_url("path", format!("'{path}': {e}")))?;

        if url.origin() != self.base.origin() || !url.path().starts_with(self.base.path()) {
            return Err(ConfigurationError::invalid_url(
                "path",
                format!("'{path}' resolves outside {}", self.base),
            ));
        }

        Ok(url)
    }

    /// Public drink listing
    pub fn drinks(&self) -> Result<Url> {
        self.url_for(DRINKS_PATH)
    }

    /// Drink listing with recipes, requires `get:drinks-detail`
    pub fn drinks_detail(&self) -> Result<Url> {
        self.url_for(DRINKS_DETAIL_PATH)
    }

    /// Single drink, target of PATCH and DELETE
    pub fn drink(&self, id: u64) -> Result<Url> {
        self.url_for(&format!("{DRINKS_PATH}/{id}"))
    }
}
