//! HTTP client and service layer for the Flick API.
//!
//! The main entry point is [`FlickClient`], which logs in and exposes
//! the API services.
//!
//! ```no_run
//! use flick_rs::FlickClient;
//!
//! # async fn example() -> flick_rs::Result<()> {
//! let client = FlickClient::login("email@example.com", "password").await?;
//! let price = client.price().current().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_API_URL};
pub use http::FlickClient;
pub(crate) use http::ClientInner;
