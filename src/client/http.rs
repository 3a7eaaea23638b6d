//! HTTP client implementation for the Flick API.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;

use crate::api::PriceService;
use crate::auth::Session;
use crate::{Error, Result};

use super::config::ClientConfig;

/// In-body marker for a rejected session token. The API returns this
/// with an HTTP 200, so it has to be detected in the payload.
const TOKEN_VERIFICATION_FAILED_MARKER: &str =
    r#"{"error":"urn:flick:authentication:error:token_verification_failed"}"#;

/// In-body marker for a method-not-allowed answer.
const METHOD_NOT_ALLOWED_MARKER: &str = "405 Not Allowed";

/// The main client for interacting with the Flick API.
///
/// The client owns an authenticated [`Session`] and exposes API
/// services through accessor methods. Cloning is cheap; clones share
/// the same session and HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use flick_rs::FlickClient;
///
/// # async fn example() -> flick_rs::Result<()> {
/// let client = FlickClient::login("email@example.com", "password").await?;
/// let price = client.price().current().await?;
/// println!("current price: {price} cents/kWh");
/// # Ok(())
/// # }
/// ```
pub struct FlickClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl FlickClient {
    /// Log in with username/password against the production API.
    pub async fn login(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::login_with_config(username, password, ClientConfig::default()).await
    }

    /// Log in with username/password and a custom configuration.
    pub async fn login_with_config(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let session = Session::from_credentials(username, password, &config).await?;
        Self::with_session(session, config)
    }

    /// Create a client from an existing session and configuration.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Get the price service.
    pub fn price(&self) -> PriceService {
        PriceService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Perform an authenticated GET against a named logical endpoint
    /// and return the raw response body.
    ///
    /// The session is checked before any network activity: an empty
    /// token or token type fails with [`Error::Unauthorized`], an
    /// unregistered endpoint name with [`Error::UnknownEndpoint`].
    /// Successful bodies are scanned for the API's in-body error
    /// markers before being returned.
    pub async fn api_call(&self, endpoint: &str) -> Result<Vec<u8>> {
        self.inner.get_authenticated(endpoint).await
    }
}

impl ClientInner {
    /// Authenticated GET, returning the raw body after the error-marker scan.
    pub(crate) async fn get_authenticated(&self, endpoint: &str) -> Result<Vec<u8>> {
        if !self.session.is_usable() {
            return Err(Error::Unauthorized);
        }
        let url = self.config.endpoint_url(endpoint)?;

        tracing::debug!(endpoint, url = %url, "authenticated GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.session.authorization_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The API reports its failures inside 200 bodies; anything
            // else is still worth surfacing in the logs before the
            // body is handed to the parsers.
            tracing::warn!(endpoint, status = %status, "non-success status from API");
        }

        let body = response.bytes().await?;
        check_error_markers(&body)?;
        Ok(body.to_vec())
    }
}

/// Scan a response body for API-level error markers that do not map to
/// HTTP status codes. Runs on every authenticated-call body before any
/// endpoint-specific parsing.
pub(crate) fn check_error_markers(body: &[u8]) -> Result<()> {
    let text = String::from_utf8_lossy(body);
    if text.contains(TOKEN_VERIFICATION_FAILED_MARKER) {
        return Err(Error::TokenInvalid);
    }
    if text.contains(METHOD_NOT_ALLOWED_MARKER) {
        return Err(Error::MethodNotAllowed);
    }
    Ok(())
}

impl Clone for FlickClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FlickClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlickClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}
