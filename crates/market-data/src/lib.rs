//! Pricewire Market Data Crate
//!
//! This crate provides the market data fetching capability behind the
//! pricewire price API.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Validated stock symbols (`Symbol`)
//! - Period/interval range queries (`RangeQuery`)
//! - OHLCV price history with an instrument display name (`PriceHistory`)
//! - A provider abstraction (`MarketDataProvider`) with a Yahoo Finance
//!   implementation (`YahooProvider`)
//!
//! # Core Types
//!
//! - [`Symbol`] - Validated stock symbol
//! - [`RangeQuery`] - Provider-native (period, interval) pair
//! - [`PriceBar`] - One sampled interval of OHLCV data
//! - [`PriceHistory`] - Ordered bars plus the instrument display name
//! - [`MarketDataError`] - Error taxonomy for fetch operations

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{PriceBar, PriceHistory, RangeQuery, Symbol, UNKNOWN_DISPLAY_NAME};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;

pub use errors::MarketDataError;
