//! Services Layer
//!
//! Business logic between the HTTP handlers and the market-data provider.
//! Services are stateless per request; each call performs one or two
//! round-trips to the provider and returns a flat snapshot.
//!
//! # Services
//!
//! - `QuoteService` - Current-price snapshot for a ticker
//! - `OptionsService` - Curated options chain with expiration metadata

pub mod options_service;
pub mod quote_service;

pub use options_service::{
    ExpirationCategory, ExpirationInfo, OptionContract, OptionsChainResponse, OptionsService,
};
pub use quote_service::{Quote, QuoteService};
