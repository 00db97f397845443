//! Quote Service
//!
//! Handles current-price snapshot retrieval for a ticker symbol.

use crate::error::Result;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Current-price snapshot for a ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: Option<f64>,
    pub company_name: String,
    pub currency: String,
}

/// Quote service for business logic
pub struct QuoteService;

impl QuoteService {
    /// Get the live quote for a symbol
    ///
    /// The symbol is case-insensitive and echoed back upper-cased. Price
    /// prefers the provider's current price and falls back to the regular
    /// market price; `None` means the provider has no live quote.
    pub async fn get_quote(state: &AppState, symbol: &str) -> Result<Quote> {
        info!("QuoteService::get_quote - {}", symbol);

        let info = state.provider.get_ticker_info(symbol).await?;

        Ok(Quote {
            symbol: symbol.to_uppercase(),
            price: info.current_price.or(info.regular_market_price),
            company_name: info.short_name.unwrap_or_else(|| "N/A".to_string()),
            currency: info.currency.unwrap_or_else(|| "N/A".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::provider::types::{RawOptionChain, TickerInfo};
    use crate::provider::MarketDataProvider;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct FakeProvider {
        info: TickerInfo,
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn get_ticker_info(&self, _symbol: &str) -> crate::error::Result<TickerInfo> {
            Ok(self.info.clone())
        }

        async fn get_expirations(&self, _symbol: &str) -> crate::error::Result<Vec<NaiveDate>> {
            Ok(vec![])
        }

        async fn get_option_chain(
            &self,
            _symbol: &str,
            _expiration: NaiveDate,
        ) -> crate::error::Result<RawOptionChain> {
            Ok(RawOptionChain::default())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl MarketDataProvider for FailingProvider {
        async fn get_ticker_info(&self, symbol: &str) -> crate::error::Result<TickerInfo> {
            Err(AppError::Provider(format!("No quote data returned for {}", symbol)))
        }

        async fn get_expirations(&self, _symbol: &str) -> crate::error::Result<Vec<NaiveDate>> {
            Ok(vec![])
        }

        async fn get_option_chain(
            &self,
            _symbol: &str,
            _expiration: NaiveDate,
        ) -> crate::error::Result<RawOptionChain> {
            Ok(RawOptionChain::default())
        }
    }

    fn state_with(info: TickerInfo) -> AppState {
        AppState::new(Arc::new(FakeProvider { info }))
    }

    #[tokio::test]
    async fn test_symbol_echoed_uppercase() {
        let state = state_with(TickerInfo {
            current_price: Some(187.5),
            regular_market_price: Some(187.2),
            short_name: Some("Apple Inc.".to_string()),
            currency: Some("USD".to_string()),
        });

        let quote = QuoteService::get_quote(&state, "aapl").await.unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, Some(187.5));
        assert_eq!(quote.company_name, "Apple Inc.");
        assert_eq!(quote.currency, "USD");
    }

    #[tokio::test]
    async fn test_falls_back_to_regular_market_price() {
        let state = state_with(TickerInfo {
            current_price: None,
            regular_market_price: Some(42.0),
            short_name: None,
            currency: None,
        });

        let quote = QuoteService::get_quote(&state, "XYZ").await.unwrap();
        assert_eq!(quote.price, Some(42.0));
        assert_eq!(quote.company_name, "N/A");
        assert_eq!(quote.currency, "N/A");
    }

    #[tokio::test]
    async fn test_missing_price_is_none_not_error() {
        let state = state_with(TickerInfo::default());

        let quote = QuoteService::get_quote(&state, "XYZ").await.unwrap();
        assert_eq!(quote.price, None);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let state = AppState::new(Arc::new(FailingProvider));

        let result = QuoteService::get_quote(&state, "NOPE").await;
        assert!(matches!(result, Err(AppError::Provider(_))));
    }
}
