//! Raw provider wire types
//!
//! These mirror the shapes the market-data provider sends. Every numeric
//! field can be missing, and the upstream feed is known to emit NaN and
//! infinite values for illiquid contracts, so floats are filtered to
//! finite-or-absent at deserialization time. Non-finite values never reach
//! the typed model.

use serde::{Deserialize, Deserializer};

/// Keep a float only if it is finite
pub fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Deserialize an optional float, rewriting NaN and ±infinity to `None`
fn deserialize_finite_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(finite_or_none(value))
}

/// Live ticker metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerInfo {
    #[serde(default, rename = "currentPrice", deserialize_with = "deserialize_finite_opt")]
    pub current_price: Option<f64>,
    #[serde(default, rename = "regularMarketPrice", deserialize_with = "deserialize_finite_opt")]
    pub regular_market_price: Option<f64>,
    #[serde(default, rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// One option contract record as the provider sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContract {
    #[serde(default, deserialize_with = "deserialize_finite_opt")]
    pub strike: Option<f64>,
    #[serde(default, rename = "lastPrice", deserialize_with = "deserialize_finite_opt")]
    pub last_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_finite_opt")]
    pub bid: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_finite_opt")]
    pub ask: Option<f64>,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default, rename = "openInterest")]
    pub open_interest: Option<i64>,
    #[serde(default, rename = "impliedVolatility", deserialize_with = "deserialize_finite_opt")]
    pub implied_volatility: Option<f64>,
}

/// Raw option chain for a single expiration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOptionChain {
    #[serde(default)]
    pub calls: Vec<RawContract>,
    #[serde(default)]
    pub puts: Vec<RawContract>,
}
