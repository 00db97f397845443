//! REST API endpoint handlers
//!
//! Handlers adapt service results to the documented wire contract: every
//! response is HTTP 200 JSON, with failures encoded as `{"error": "..."}`.

use crate::error::AppError;
use crate::server::types::{ApiPayload, MessagePayload};
use crate::services::{OptionsChainResponse, OptionsService, Quote, QuoteService};
use crate::state::AppState;
use axum::extract::{Json, Path, Query, State as AxumState};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Query parameters for the options endpoint
#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    pub expiration: Option<String>,
}

/// Welcome endpoint - GET /
pub async fn root() -> Json<MessagePayload> {
    Json(MessagePayload::new("Welcome to OptionsWiz"))
}

/// Health check endpoint - GET /health
pub async fn health_check() -> Json<MessagePayload> {
    Json(MessagePayload::new("OptionsWiz API is running"))
}

/// Stock quote endpoint - GET /stock/{symbol}
pub async fn get_stock(
    AxumState(state): AxumState<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Json<ApiPayload<Quote>> {
    let result = QuoteService::get_quote(&state, &symbol).await;

    if let Err(e) = &result {
        warn!("Stock quote request failed for {}: {}", symbol, e);
    }

    Json(ApiPayload::from(result))
}

/// Options chain endpoint - GET /options/{symbol}?expiration=YYYY-MM-DD
pub async fn get_options(
    AxumState(state): AxumState<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> Json<ApiPayload<OptionsChainResponse>> {
    let requested = match query.expiration.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Rejecting malformed expiration date: {}", raw);
                return Json(ApiPayload::error(&AppError::ExpirationNotAvailable(
                    raw.to_string(),
                )));
            }
        },
        None => None,
    };

    let result = OptionsService::get_options_chain(&state, &symbol, requested).await;

    if let Err(e) = &result {
        warn!("Options chain request failed for {}: {}", symbol, e);
    }

    Json(ApiPayload::from(result))
}
