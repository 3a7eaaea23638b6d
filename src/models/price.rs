//! Price forecast document models.
//!
//! The price endpoint returns a loosely-shaped document; only a small
//! part of it is relied upon, so every field is optional and decoding
//! never fails just because the API added or dropped a field. Missing
//! data becomes a typed `None`, checked by the caller, instead of a
//! decode error.

use serde::Deserialize;

/// Top-level price forecast document.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceForecast {
    /// Document kind, `"mobile_provider_price"` in practice
    #[serde(default)]
    pub kind: Option<String>,
    /// The nested payload carrying the actual forecast
    #[serde(default)]
    pub needle: Option<Needle>,
    /// Customer account state, e.g. `"active"`
    #[serde(default)]
    pub customer_state: Option<String>,
}

/// The nested forecast payload ("needle" is the upstream API's name
/// for it).
#[derive(Debug, Clone, Deserialize)]
pub struct Needle {
    /// Current price as a string-encoded decimal, cents per kWh
    #[serde(default)]
    pub price: Option<String>,
    /// Unit of the price, `"cents"` in practice
    #[serde(default)]
    pub unit_code: Option<String>,
    /// Unit the price applies per, `"kwh"` in practice
    #[serde(default)]
    pub per: Option<String>,
    /// Forecast status URN
    #[serde(default)]
    pub status: Option<String>,
    /// Forecast type, e.g. `"rated"`
    #[serde(default, rename = "type")]
    pub forecast_type: Option<String>,
    /// Charge methods contributing to the price
    #[serde(default)]
    pub charge_methods: Vec<String>,
    /// Start of the forecast window (RFC 3339)
    #[serde(default)]
    pub start_at: Option<String>,
    /// End of the forecast window (RFC 3339)
    #[serde(default)]
    pub end_at: Option<String>,
    /// Server-side timestamp of the quote (RFC 3339)
    #[serde(default)]
    pub now: Option<String>,
    /// Per-charge-setter breakdown of the price
    #[serde(default)]
    pub components: Vec<PriceComponent>,
}

/// One component of the price breakdown.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceComponent {
    /// Component kind, `"component"` in practice
    #[serde(default)]
    pub kind: Option<String>,
    /// Who sets this charge: `"retailer"`, `"network"`, `"ea"`, ...
    #[serde(default)]
    pub charge_setter: Option<String>,
    /// Charge method, e.g. `"kwh"` or `"spot_price"`
    #[serde(default)]
    pub charge_method: Option<String>,
    /// Component value as a string-encoded decimal
    #[serde(default)]
    pub value: Option<String>,
    /// Unit of the value
    #[serde(default)]
    pub unit_code: Option<String>,
    /// Unit the value applies per
    #[serde(default)]
    pub per: Option<String>,
}
