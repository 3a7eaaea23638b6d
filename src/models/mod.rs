//! Data models for the Flick API.
//!
//! - [`price`] - Price forecast document shapes

pub mod price;

pub use price::{Needle, PriceComponent, PriceForecast};
