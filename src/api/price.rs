//! Price service: current price extraction and validation.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::client::config::endpoints;
use crate::models::PriceForecast;
use crate::{Error, Result};

/// Service for price operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: flick_rs::FlickClient) -> flick_rs::Result<()> {
/// let price = client.price().current().await?;
/// println!("{price} cents/kWh");
/// # Ok(())
/// # }
/// ```
pub struct PriceService {
    inner: Arc<ClientInner>,
}

impl PriceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current electricity price in cents per kWh.
    ///
    /// The returned value is validated: it is always finite and
    /// non-negative.
    pub async fn current(&self) -> Result<f64> {
        let body = self.inner.get_authenticated(endpoints::PRICE).await?;
        parse_price(&body)
    }

    /// Get the full price forecast document, including the window
    /// timestamps and the per-charge-setter component breakdown.
    pub async fn forecast(&self) -> Result<PriceForecast> {
        let body = self.inner.get_authenticated(endpoints::PRICE).await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::MalformedResponse(format!("invalid price document: {e}")))
    }
}

/// Extract and validate the current price from raw price-endpoint bytes.
///
/// The document is decoded into a partial typed shape; a missing
/// `needle` or `needle.price` is a typed condition, not a decode
/// failure. The string-encoded price must parse as a finite,
/// non-negative float; sentinel values the API might emit ("NaN",
/// "Inf", negatives) are rejected even though they parse.
pub(crate) fn parse_price(body: &[u8]) -> Result<f64> {
    let doc: PriceForecast = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedResponse(format!("failed to parse response: {e}")))?;

    let needle = doc
        .needle
        .ok_or_else(|| Error::MalformedResponse("failed to parse response: no needle".into()))?;
    let raw = needle
        .price
        .ok_or_else(|| Error::MalformedResponse("failed to get price: needle has no price".into()))?;

    let price: f64 = raw.parse().map_err(|e| {
        Error::MalformedResponse(format!("failed to get price: {raw:?} is not a number: {e}"))
    })?;

    if price.is_nan() || price.is_infinite() || price < 0.0 {
        return Err(Error::InvalidPriceValue(price));
    }
    Ok(price)
}
