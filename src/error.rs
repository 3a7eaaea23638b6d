//! Error types for the Flick API client.
//!
//! Every failure mode of the client surfaces here. All errors are terminal
//! for the operation that raised them; the client never retries internally.

use thiserror::Error;

/// A specialized `Result` type for Flick API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Flick API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The auth endpoint rejected the supplied username/password.
    ///
    /// The API signals this with a plain-text body, not a JSON error
    /// object, so it is detected before any decoding is attempted.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth response decoded as JSON but did not carry usable
    /// auth data (empty token, or a token type other than `bearer`).
    #[error("authentication incomplete: {0}")]
    AuthenticationIncomplete(String),

    /// A response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The API returned a syntactically valid price that is not a
    /// sensible price (NaN, infinite, or negative).
    #[error("invalid price value returned by API: {0}")]
    InvalidPriceValue(f64),

    /// The API rejected the session token.
    #[error("auth token failed verification")]
    TokenInvalid,

    /// The API answered with its in-body `405 Not Allowed` marker.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// An authenticated call was attempted with an empty token or
    /// token type. No request is made in this case.
    #[error("unauthorized: session token and/or token type are empty")]
    Unauthorized,

    /// A logical endpoint name is not present in the endpoint registry.
    /// No request is made in this case.
    #[error("unknown endpoint: {0:?}")]
    UnknownEndpoint(String),

    /// The HTTP round-trip itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns `true` if this error relates to authentication: bad
    /// credentials, an unusable session, or a rejected token.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredentials
                | Error::AuthenticationIncomplete(_)
                | Error::TokenInvalid
                | Error::Unauthorized
        )
    }

    /// Returns `true` if the failure happened below the API layer,
    /// in the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
