//! Yahoo Finance market data provider.
//!
//! Price history comes from the chart API through the `yahoo_finance_api`
//! connector; the instrument display name comes from the quoteSummary API
//! (which requires crumb/cookie authentication) with ticker search as a
//! fallback.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{PriceBar, PriceHistory, RangeQuery, Symbol};
use crate::provider::MarketDataProvider;

use models::YahooQuoteSummaryResponse;

const PROVIDER_ID: &str = "YAHOO";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub async fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::Provider {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self { connector })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Check if we have a cached crumb
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        // Fetch new crumb
        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let client = reqwest::Client::new();

        // Step 1: Get cookie from fc.yahoo.com
        let response = client.get("https://fc.yahoo.com").send().await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        let crumb_data = CrumbData { cookie, crumb };

        // Cache it
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // History Fetching
    // ========================================================================

    async fn fetch_bars(
        &self,
        symbol: &Symbol,
        range: &RangeQuery,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        let response = match self
            .connector
            .get_quote_range(symbol.as_str(), range.interval, range.period)
            .await
        {
            Ok(response) => response,
            Err(yahoo::YahooError::NoQuotes) | Err(yahoo::YahooError::NoResult) => {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(MarketDataError::Provider {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(yahoo::YahooError::NoQuotes) | Err(yahoo::YahooError::NoResult) => {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(MarketDataError::Provider {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                });
            }
        };

        quotes.into_iter().map(convert_quote).collect()
    }

    // ========================================================================
    // Display Name Fetching
    // ========================================================================

    /// Resolve the instrument display name, or `None` when Yahoo has none.
    async fn fetch_display_name(&self, symbol: &Symbol) -> Option<String> {
        match self.fetch_quote_summary_name(symbol).await {
            Ok(name) => name,
            Err(e) => {
                debug!(
                    "quoteSummary name lookup failed for {}: {}, trying search",
                    symbol, e
                );
                self.fetch_search_name(symbol).await
            }
        }
    }

    /// Fetch the display name from the quoteSummary price module.
    async fn fetch_quote_summary_name(
        &self,
        symbol: &Symbol,
    ) -> Result<Option<String>, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(symbol.as_str()),
            encode(&crumb.crumb)
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        let data: YahooQuoteSummaryResponse = response.json().await?;

        let name = data
            .quote_summary
            .result
            .first()
            .and_then(|r| r.price.as_ref())
            .and_then(|p| p.long_name.clone().or_else(|| p.short_name.clone()));

        Ok(name)
    }

    /// Fetch the display name via ticker search (last resort).
    async fn fetch_search_name(&self, symbol: &Symbol) -> Option<String> {
        let result = match self.connector.search_ticker(&encode(symbol.as_str())).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Search name lookup failed for {}: {}", symbol, e);
                return None;
            }
        };

        let item = result.quotes.iter().find(|q| q.symbol == symbol.as_str())?;
        if !item.long_name.is_empty() {
            Some(item.long_name.clone())
        } else if !item.short_name.is_empty() {
            Some(item.short_name.clone())
        } else {
            None
        }
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_history(
        &self,
        symbol: &Symbol,
        range: &RangeQuery,
    ) -> Result<PriceHistory, MarketDataError> {
        debug!("Fetching {} history for {} from Yahoo", range, symbol);

        let bars = self.fetch_bars(symbol, range).await?;
        if bars.is_empty() {
            debug!("No bars returned for {} over {}", symbol, range);
            return Ok(PriceHistory::empty());
        }

        let display_name = self.fetch_display_name(symbol).await;
        Ok(PriceHistory::new(bars, display_name))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a Yahoo chart quote to a PriceBar.
///
/// The chart-range endpoint does not report corporate actions, so dividends
/// and splits keep their zero defaults.
fn convert_quote(quote: yahoo::Quote) -> Result<PriceBar, MarketDataError> {
    let timestamp = Utc
        .timestamp_opt(quote.timestamp as i64, 0)
        .single()
        .ok_or_else(|| MarketDataError::InvalidValue {
            message: format!("Invalid timestamp: {}", quote.timestamp),
        })?;

    PriceBar::new(
        timestamp,
        Some(quote.open),
        Some(quote.high),
        Some(quote.low),
        Some(quote.close),
        Some(quote.volume),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_reports_its_id() {
        let provider = YahooProvider::new().await.expect("connector should build");
        assert_eq!(provider.id(), "YAHOO");
    }
}
