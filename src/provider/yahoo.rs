//! Yahoo Finance provider adapter
//!
//! Talks to the unofficial v7 finance API. Data is delayed ~15 minutes and
//! intended for personal use.

use crate::error::{AppError, Result};
use crate::provider::types::{RawOptionChain, TickerInfo};
use crate::provider::MarketDataProvider;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API client
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the options payload, optionally scoped to one expiration
    async fn fetch_chain_data(
        &self,
        symbol: &str,
        expiration: Option<NaiveDate>,
    ) -> Result<YahooChainData> {
        let url = match expiration {
            Some(date) => {
                // The API keys expirations by their midnight UTC timestamp
                let ts = date.and_time(NaiveTime::MIN).and_utc().timestamp();
                format!("{}/options/{}?date={}", self.base_url, symbol, ts)
            }
            None => format!("{}/options/{}", self.base_url, symbol),
        };

        let response: YahooOptionsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse options for {}: {}", symbol, e)))?;

        response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Provider(format!("No options data returned for {}", symbol)))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn get_ticker_info(&self, symbol: &str) -> Result<TickerInfo> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse quote for {}: {}", symbol, e)))?;

        response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Provider(format!("No quote data returned for {}", symbol)))
    }

    async fn get_expirations(&self, symbol: &str) -> Result<Vec<NaiveDate>> {
        let data = self.fetch_chain_data(symbol, None).await?;

        let expirations = data
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect();

        Ok(expirations)
    }

    async fn get_option_chain(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<RawOptionChain> {
        let data = self.fetch_chain_data(symbol, Some(expiration)).await?;

        Ok(data.options.into_iter().next().unwrap_or_default())
    }
}

// Yahoo Finance API response wrappers

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    #[serde(default)]
    result: Vec<TickerInfo>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: YahooOptionChain,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChain {
    #[serde(default)]
    result: Vec<YahooChainData>,
}

#[derive(Debug, Deserialize)]
struct YahooChainData {
    #[serde(default, rename = "expirationDates")]
    expiration_dates: Vec<i64>,
    #[serde(default)]
    options: Vec<RawOptionChain>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_response_parsing() {
        let body = r#"{
            "optionChain": {
                "result": [{
                    "expirationDates": [1759449600, 1760054400],
                    "options": [{
                        "calls": [{"strike": 150.0, "lastPrice": 4.75, "impliedVolatility": 0.32}],
                        "puts": [{"strike": 150.0, "bid": 4.6, "ask": 4.9}]
                    }]
                }]
            }
        }"#;

        let response: YahooOptionsResponse = serde_json::from_str(body).unwrap();
        let data = &response.option_chain.result[0];
        assert_eq!(data.expiration_dates.len(), 2);

        let chain = &data.options[0];
        assert_eq!(chain.calls[0].strike, Some(150.0));
        assert_eq!(chain.puts[0].ask, Some(4.9));
    }

    #[test]
    fn test_expiration_timestamp_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        let ts = date.and_time(NaiveTime::MIN).and_utc().timestamp();
        let back = DateTime::from_timestamp(ts, 0).unwrap().date_naive();
        assert_eq!(back, date);
    }

    #[test]
    #[ignore] // Requires network
    fn test_live_quote() {
        let provider = YahooProvider::new("https://query1.finance.yahoo.com/v7/finance", 30);
        let rt = tokio::runtime::Runtime::new().unwrap();
        let info = rt.block_on(provider.get_ticker_info("AAPL")).unwrap();
        assert!(info.regular_market_price.is_some());
    }
}
