//! Market data provider adapters

pub mod types;
pub mod yahoo;

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use types::{RawOptionChain, TickerInfo};

/// Market data provider that quote and options services depend on.
///
/// Implementations are treated as opaque, possibly-slow, possibly-failing
/// remote dependencies. Tests substitute a fake implementation.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get live metadata for a ticker symbol
    async fn get_ticker_info(&self, symbol: &str) -> Result<TickerInfo>;

    /// Get the ordered list of option expiration dates for a symbol
    async fn get_expirations(&self, symbol: &str) -> Result<Vec<NaiveDate>>;

    /// Get the raw option chain (calls and puts) for one expiration
    async fn get_option_chain(&self, symbol: &str, expiration: NaiveDate)
        -> Result<RawOptionChain>;
}

pub use yahoo::YahooProvider;
