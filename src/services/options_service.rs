//! Options Service
//!
//! Fetches the full options chain for a symbol and curates it: resolves an
//! expiration date, filters strikes to a band around the current price,
//! strips non-finite floats, and annotates every listed expiration with
//! display metadata.

use crate::error::{AppError, Result};
use crate::provider::types::{finite_or_none, RawContract};
use crate::services::QuoteService;
use crate::state::AppState;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Retain strikes within [price * LOW, price * HIGH], inclusive
const STRIKE_BAND_LOW: f64 = 0.9;
const STRIKE_BAND_HIGH: f64 = 1.1;
/// Per-side cap after strike filtering
const MAX_CONTRACTS_PER_SIDE: usize = 10;
/// Expirations further out than this are omitted from the metadata list
const ENRICHMENT_WINDOW_DAYS: i64 = 180;
/// Cap on the enriched expiration list
const MAX_EXPIRATIONS: usize = 12;

const SECONDS_PER_DAY: i64 = 86_400;

/// One curated option contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub last_price: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub volume: Option<i64>,
    pub open_interest: Option<i64>,
    pub implied_volatility: Option<f64>,
}

impl OptionContract {
    /// Rewrite any non-finite numeric field to `None`; idempotent
    pub fn sanitized(self) -> Self {
        Self {
            strike: self.strike,
            last_price: finite_or_none(self.last_price),
            bid: finite_or_none(self.bid),
            ask: finite_or_none(self.ask),
            volume: self.volume,
            open_interest: self.open_interest,
            implied_volatility: finite_or_none(self.implied_volatility),
        }
    }
}

/// Time-to-expiry bucket for an expiration date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpirationCategory {
    Weekly,
    ShortTerm,
    Monthly,
    Quarterly,
    LongTerm,
}

/// Display metadata for one listed expiration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationInfo {
    pub date: NaiveDate,
    pub days_until_expiration: i64,
    pub category: ExpirationCategory,
    pub is_current: bool,
    pub formatted_date: String,
    pub trading_days_approx: i64,
}

/// Curated options chain response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsChainResponse {
    pub symbol: String,
    pub current_price: f64,
    pub expiration_date: NaiveDate,
    pub days_to_expiration: i64,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
    pub available_expirations: Vec<ExpirationInfo>,
}

/// Options service for business logic
pub struct OptionsService;

impl OptionsService {
    /// Get the curated options chain for a symbol
    ///
    /// When `requested` is `None`, the first expiration strictly after
    /// today (in provider order) is selected. A requested date must be a
    /// member of the provider's expiration list.
    pub async fn get_options_chain(
        state: &AppState,
        symbol: &str,
        requested: Option<NaiveDate>,
    ) -> Result<OptionsChainResponse> {
        info!("OptionsService::get_options_chain - {} {:?}", symbol, requested);

        let quote = QuoteService::get_quote(state, symbol).await?;
        let price = quote
            .price
            .ok_or_else(|| AppError::NoPriceAvailable(quote.symbol.clone()))?;

        let expirations = state.provider.get_expirations(symbol).await?;
        if expirations.is_empty() {
            return Err(AppError::NoOptionsAvailable(quote.symbol));
        }

        let now = Utc::now();
        let selected = Self::select_expiration(&expirations, requested, now, &quote.symbol)?;

        let chain = state.provider.get_option_chain(symbol, selected).await?;
        let calls = Self::curate_contracts(chain.calls, price);
        let puts = Self::curate_contracts(chain.puts, price);

        Ok(OptionsChainResponse {
            symbol: quote.symbol,
            current_price: price,
            expiration_date: selected,
            days_to_expiration: Self::days_until(selected, now),
            calls,
            puts,
            available_expirations: Self::enrich_expirations(&expirations, selected, now),
        })
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    /// Resolve the expiration date to use for the chain fetch
    fn select_expiration(
        expirations: &[NaiveDate],
        requested: Option<NaiveDate>,
        now: DateTime<Utc>,
        symbol: &str,
    ) -> Result<NaiveDate> {
        match requested {
            Some(date) => {
                if expirations.contains(&date) {
                    Ok(date)
                } else {
                    Err(AppError::ExpirationNotAvailable(date.to_string()))
                }
            }
            None => {
                let today = now.date_naive();
                expirations
                    .iter()
                    .copied()
                    .find(|&date| date > today)
                    .ok_or_else(|| AppError::NoActiveExpirations(symbol.to_string()))
            }
        }
    }

    /// Sanitize raw contracts, keep strikes inside the band, cap the list
    ///
    /// Provider order is preserved; no re-sorting before truncation.
    fn curate_contracts(raw: Vec<RawContract>, price: f64) -> Vec<OptionContract> {
        let low = price * STRIKE_BAND_LOW;
        let high = price * STRIKE_BAND_HIGH;

        raw.into_iter()
            .filter_map(Self::convert_contract)
            .filter(|c| c.strike >= low && c.strike <= high)
            .take(MAX_CONTRACTS_PER_SIDE)
            .collect()
    }

    /// Convert a raw record to the typed model; records without a usable
    /// strike are dropped
    fn convert_contract(raw: RawContract) -> Option<OptionContract> {
        let strike = finite_or_none(raw.strike)?;

        let contract = OptionContract {
            strike,
            last_price: raw.last_price,
            bid: raw.bid,
            ask: raw.ask,
            volume: raw.volume,
            open_interest: raw.open_interest,
            implied_volatility: raw.implied_volatility,
        };

        Some(contract.sanitized())
    }

    /// Whole days from `now` until midnight of `expiration`
    ///
    /// Truncated timestamp difference, floored: a date less than 24 hours
    /// away counts as 0 days. This intentionally differs from calendar-day
    /// subtraction depending on time of day.
    fn days_until(expiration: NaiveDate, now: DateTime<Utc>) -> i64 {
        let expiry = expiration.and_time(NaiveTime::MIN).and_utc();
        (expiry - now).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Bucket an expiration by days to expiry; cutoffs are inclusive
    fn categorize(days: i64) -> ExpirationCategory {
        match days {
            d if d <= 7 => ExpirationCategory::Weekly,
            d if d <= 30 => ExpirationCategory::ShortTerm,
            d if d <= 90 => ExpirationCategory::Monthly,
            d if d <= 180 => ExpirationCategory::Quarterly,
            _ => ExpirationCategory::LongTerm,
        }
    }

    /// Build display metadata for every future expiration within the
    /// enrichment window, sorted ascending and capped
    fn enrich_expirations(
        expirations: &[NaiveDate],
        selected: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<ExpirationInfo> {
        let mut enriched: Vec<ExpirationInfo> = expirations
            .iter()
            .copied()
            .filter_map(|date| {
                let days = Self::days_until(date, now);
                if days <= 0 || days > ENRICHMENT_WINDOW_DAYS {
                    return None;
                }

                Some(ExpirationInfo {
                    date,
                    days_until_expiration: days,
                    category: Self::categorize(days),
                    is_current: date == selected,
                    formatted_date: date.format("%b %d, %Y").to_string(),
                    trading_days_approx: days * 5 / 7,
                })
            })
            .collect();

        enriched.sort_by_key(|info| info.days_until_expiration);
        enriched.truncate(MAX_EXPIRATIONS);
        enriched
    }
}
