//! Authentication and session management for the Flick API.
//!
//! Authentication is a single password-grant OAuth exchange: the
//! username and password are posted to the token endpoint together
//! with the mobile app's client credentials, and the response yields
//! a bearer [`Session`]. There is no refresh flow; when a session
//! stops working, log in again.
//!
//! ```no_run
//! use flick_rs::{ClientConfig, Session};
//!
//! # async fn example() -> flick_rs::Result<()> {
//! let session = Session::from_credentials(
//!     "email@example.com",
//!     "password",
//!     &ClientConfig::default(),
//! ).await?;
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::Session;
