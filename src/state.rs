//! Application state management

use crate::provider::MarketDataProvider;
use std::sync::Arc;

/// Application state shared across all request handlers
///
/// Holds the market-data provider behind a trait object so tests can
/// substitute a fake implementation.
pub struct AppState {
    /// Market data provider
    pub provider: Arc<dyn MarketDataProvider>,
}

impl AppState {
    /// Create new application state with an injected provider
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}
