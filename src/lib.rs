//! OptionsWiz backend
//!
//! A thin API that proxies stock quotes and curated options chains from a
//! third-party market-data provider for the OptionsWiz dashboard.

pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod services;
pub mod state;
