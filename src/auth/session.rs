//! Session management for Flick API authentication.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::client::ClientConfig;
use crate::client::config::endpoints;
use crate::{Error, Result};

/// Plain-text marker the API returns on a rejected password grant.
///
/// Bad credentials produce this free-form string instead of a JSON
/// error object, so it must be checked before any decoding.
const INVALID_GRANT_MARKER: &str = "Auth failed invalid_grant";

/// Authentication session for the Flick API.
///
/// Holds the bearer token obtained from a password-grant login. A
/// session is immutable once constructed; there is no token refresh,
/// a new login produces a new session.
///
/// `expires_in` is informational only and is not enforced by the
/// client.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
    token_type: String,
    expires_in: i64,
    access_token: SecretString,
}

impl Session {
    /// Create a session from already-obtained token material.
    ///
    /// Useful for tests and for callers that perform the token
    /// exchange themselves. Note that [`FlickClient::api_call`]
    /// refuses a session whose token or token type is empty.
    ///
    /// [`FlickClient::api_call`]: crate::FlickClient::api_call
    pub fn new(
        token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            token: SecretString::from(token.into()),
            token_type: token_type.into(),
            expires_in,
            access_token: SecretString::from(access_token.into()),
        }
    }

    /// Perform a password-grant login and parse the result.
    ///
    /// Posts a form with `grant_type=password` and the configured
    /// OAuth client credentials to the `auth` endpoint.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidCredentials`] - the API rejected the login
    /// * [`Error::AuthenticationIncomplete`] - the response decoded but
    ///   carried no usable token
    /// * [`Error::MalformedResponse`] - the response was not decodable
    /// * [`Error::Transport`] - the HTTP round-trip failed
    pub async fn from_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let url = config.endpoint_url(endpoints::AUTH)?;
        let username = username.into();
        let password = password.into();
        let client = reqwest::Client::new();

        tracing::debug!(url = %url, "performing password-grant login");

        let response = client
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
                ("username", username.as_str()),
                ("password", password.as_str()),
            ])
            .send()
            .await?;

        let body = response.bytes().await?;
        Self::parse(&body)
    }

    /// Parse raw auth-endpoint response bytes into a session.
    ///
    /// The plain-text invalid-grant marker is checked first, because
    /// the API answers a bad login with a non-JSON string. Only then
    /// is a structured decode attempted; a body that decodes but lacks
    /// a token (or carries a non-`bearer` token type) is rejected as
    /// incomplete.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if String::from_utf8_lossy(body).contains(INVALID_GRANT_MARKER) {
            return Err(Error::InvalidCredentials);
        }

        let auth: AuthResponse = serde_json::from_slice(body)
            .map_err(|e| Error::MalformedResponse(format!("invalid auth response: {e}")))?;

        if auth.id_token.is_empty() {
            return Err(Error::AuthenticationIncomplete(
                "response carries no id_token".to_string(),
            ));
        }
        if auth.token_type != "bearer" {
            return Err(Error::AuthenticationIncomplete(format!(
                "unexpected token type {:?}",
                auth.token_type
            )));
        }

        Ok(Self {
            token: SecretString::from(auth.id_token),
            token_type: auth.token_type,
            expires_in: auth.expires_in,
            access_token: SecretString::from(auth.access_token),
        })
    }

    /// The OAuth token used for authenticated calls.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// The token type, `"bearer"` for sessions built by [`parse`](Self::parse).
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Token lifetime in seconds as reported by the API. Informational
    /// only; expiry is not enforced.
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    /// The secondary access token returned alongside the id token.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// Value for the `Authorization` header.
    ///
    /// Only the first character of the token type is uppercased
    /// (`bearer` → `Bearer`); the upstream API expects exactly this
    /// casing, so no general title-casing is applied.
    pub fn authorization_header(&self) -> String {
        format!(
            "{} {}",
            capitalize_first(&self.token_type),
            self.token.expose_secret()
        )
    }

    /// Whether the session can be used for an authenticated call at
    /// all. This is the precondition check, not full validation: both
    /// token and token type must be non-empty.
    pub(crate) fn is_usable(&self) -> bool {
        !self.token.expose_secret().is_empty() && !self.token_type.is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Wire shape of a successful auth response.
///
/// Every field defaults so an error payload that happens to be valid
/// JSON decodes into an empty response, which is then rejected as
/// incomplete rather than malformed.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    id_token: String,
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    access_token: String,
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
