//! API service modules for Flick endpoints.

mod price;

pub use price::PriceService;
