//! # flick-rs
//!
//! A Rust client for the Flick Electric pricing API (a NZ electricity
//! retailer).
//!
//! The client performs a password-grant OAuth login, holds the
//! resulting bearer session, and fetches the current per-kWh price
//! forecast, validating the extracted value before handing it to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flick_rs::FlickClient;
//!
//! #[tokio::main]
//! async fn main() -> flick_rs::Result<()> {
//!     let client = FlickClient::login("email@example.com", "password").await?;
//!
//!     let price = client.price().current().await?;
//!     println!("current price: {price} cents/kWh");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom endpoints
//!
//! The base URL, OAuth client credentials, and endpoint registry live
//! in [`ClientConfig`], so tests and alternative deployments can
//! substitute their own:
//!
//! ```rust,no_run
//! use flick_rs::{ClientConfig, FlickClient};
//!
//! # async fn example() -> flick_rs::Result<()> {
//! let config = ClientConfig::default()
//!     .with_base_url("http://localhost:8080");
//! let client = FlickClient::login_with_config("user", "pass", config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{ClientConfig, FlickClient, DEFAULT_API_URL};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use flick_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::PriceService;
    pub use crate::auth::Session;
    pub use crate::client::{ClientConfig, FlickClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Needle, PriceComponent, PriceForecast};
}
