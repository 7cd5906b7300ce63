//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{PriceHistory, RangeQuery, Symbol};

/// Trait for market data providers.
///
/// Implement this trait to back the price API with a different data source.
/// A provider resolves a validated symbol and range query into an ordered
/// OHLCV history plus the instrument's display name.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the price history for a symbol over the given range.
    ///
    /// Returns the bars ordered by timestamp ascending. A history with zero
    /// bars is a valid outcome meaning the symbol is unknown to the provider
    /// or has no data in the range; it is distinct from an `Err`, which
    /// signals that the fetch itself failed.
    async fn fetch_history(
        &self,
        symbol: &Symbol,
        range: &RangeQuery,
    ) -> Result<PriceHistory, MarketDataError>;
}
