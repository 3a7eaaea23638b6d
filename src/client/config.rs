//! Client configuration options.

use std::collections::HashMap;
use std::time::Duration;

use crate::{Error, Result};

/// Production Flick API base URL.
pub const DEFAULT_API_URL: &str = "https://api.flick.energy";

// OAuth client credentials of the official mobile app. These are public
// knowledge (shipped inside the app) and are what the password grant
// expects by default.
const DEFAULT_CLIENT_ID: &str = "le37iwi3qctbduh39fvnpevt1m2uuvz";
const DEFAULT_CLIENT_SECRET: &str = "ignwy9ztnst3azswww66y9vd9zt6qnt";

/// Logical endpoint names known to the default registry.
pub mod endpoints {
    /// Password-grant token exchange.
    pub const AUTH: &str = "auth";
    /// Current price forecast.
    pub const PRICE: &str = "price";
}

/// Configuration for the Flick client.
///
/// Holds the API base URL, the OAuth client credentials used by the
/// password grant, and the registry mapping logical endpoint names to
/// URL paths. Everything is injectable so tests can point the client
/// at substitute endpoints.
///
/// # Example
///
/// ```
/// use flick_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are resolved against
    pub base_url: String,
    /// OAuth client id for the password grant
    pub client_id: String,
    /// OAuth client secret for the password grant
    pub client_secret: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    endpoints: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut endpoints = HashMap::new();
        endpoints.insert(
            endpoints::AUTH.to_string(),
            "/identity/oauth/token".to_string(),
        );
        endpoints.insert(
            endpoints::PRICE.to_string(),
            "/customer/mobile_provider/price".to_string(),
        );

        Self {
            base_url: DEFAULT_API_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            client_secret: DEFAULT_CLIENT_SECRET.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("flick-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            endpoints,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the OAuth client credentials used by the password grant.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_secret = client_secret.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Register or override a logical endpoint path.
    pub fn with_endpoint(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.endpoints.insert(name.into(), path.into());
        self
    }

    /// Resolve a logical endpoint name to an absolute URL.
    ///
    /// An unregistered name is an explicit error, never a malformed URL.
    pub fn endpoint_url(&self, name: &str) -> Result<String> {
        let path = self
            .endpoints
            .get(name)
            .ok_or_else(|| Error::UnknownEndpoint(name.to_string()))?;
        Ok(format!("{}{}", self.base_url, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint_url(endpoints::AUTH).unwrap(),
            "https://api.flick.energy/identity/oauth/token"
        );
        assert_eq!(
            config.endpoint_url(endpoints::PRICE).unwrap(),
            "https://api.flick.energy/customer/mobile_provider/price"
        );
    }

    #[test]
    fn test_unknown_endpoint_is_an_error() {
        let config = ClientConfig::default();
        match config.endpoint_url("$$$$") {
            Err(Error::UnknownEndpoint(name)) => assert_eq!(name, "$$$$"),
            other => panic!("expected UnknownEndpoint, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_override() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080")
            .with_endpoint("price", "/test/price");
        assert_eq!(
            config.endpoint_url("price").unwrap(),
            "http://localhost:8080/test/price"
        );
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(!config.client_id.is_empty());
        assert!(!config.client_secret.is_empty());
    }
}
