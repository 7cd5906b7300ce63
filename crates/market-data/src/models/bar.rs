use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Display name substituted when the provider cannot resolve one.
pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

/// One sampled interval of price data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Timestamp of the bar
    pub timestamp: DateTime<Utc>,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume
    pub volume: u64,

    /// Dividend paid in this interval, 0 when none was reported
    pub dividends: f64,

    /// Stock split ratio for this interval, 0 when none was reported
    pub stock_splits: f64,
}

impl PriceBar {
    /// Build a bar from provider row values.
    ///
    /// Price fields and volume are required; an absent field is a
    /// [`MarketDataError::MissingField`], a non-finite price a
    /// [`MarketDataError::InvalidValue`]. Dividends and stock splits default
    /// to 0 and can be attached with [`PriceBar::with_actions`].
    pub fn new(
        timestamp: DateTime<Utc>,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<u64>,
    ) -> Result<Self, MarketDataError> {
        let open = require(open, "open")?;
        let high = require(high, "high")?;
        let low = require(low, "low")?;
        let close = require(close, "close")?;
        let volume = volume.ok_or(MarketDataError::MissingField { field: "volume" })?;

        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            dividends: 0.0,
            stock_splits: 0.0,
        })
    }

    /// Attach corporate action values to the bar.
    pub fn with_actions(mut self, dividends: f64, stock_splits: f64) -> Self {
        self.dividends = dividends;
        self.stock_splits = stock_splits;
        self
    }
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, MarketDataError> {
    let value = value.ok_or(MarketDataError::MissingField { field })?;
    if !value.is_finite() {
        return Err(MarketDataError::InvalidValue {
            message: format!("Field '{field}' must be a finite number"),
        });
    }
    Ok(value)
}

/// Ordered price history for one symbol, oldest bar first, together with the
/// instrument's display name when the provider resolved one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceHistory {
    pub bars: Vec<PriceBar>,
    pub display_name: Option<String>,
}

impl PriceHistory {
    pub fn new(bars: Vec<PriceBar>, display_name: Option<String>) -> Self {
        Self { bars, display_name }
    }

    /// History with no bars, the "symbol unknown or nothing in range" outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar, if any.
    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn display_name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN_DISPLAY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar() -> PriceBar {
        PriceBar::new(
            Utc.with_ymd_and_hms(2024, 5, 17, 15, 30, 0).unwrap(),
            Some(101.5),
            Some(103.0),
            Some(100.25),
            Some(102.75),
            Some(1_250_000),
        )
        .expect("bar should build")
    }

    #[test]
    fn builds_bar_with_default_actions() {
        let bar = bar();
        assert_eq!(bar.close, 102.75);
        assert_eq!(bar.dividends, 0.0);
        assert_eq!(bar.stock_splits, 0.0);
    }

    #[test]
    fn with_actions_overrides_defaults() {
        let bar = bar().with_actions(0.24, 0.0);
        assert_eq!(bar.dividends, 0.24);
    }

    #[test]
    fn missing_price_field_is_reported_by_name() {
        let err = PriceBar::new(Utc::now(), Some(1.0), None, Some(1.0), Some(1.0), Some(10))
            .expect_err("must fail");
        assert!(matches!(
            err,
            MarketDataError::MissingField { field: "high" }
        ));
    }

    #[test]
    fn missing_volume_is_reported() {
        let err = PriceBar::new(Utc::now(), Some(1.0), Some(1.0), Some(1.0), Some(1.0), None)
            .expect_err("must fail");
        assert!(matches!(
            err,
            MarketDataError::MissingField { field: "volume" }
        ));
    }

    #[test]
    fn non_finite_price_is_invalid() {
        let err = PriceBar::new(
            Utc::now(),
            Some(f64::NAN),
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(10),
        )
        .expect_err("must fail");
        assert!(matches!(err, MarketDataError::InvalidValue { .. }));
    }

    #[test]
    fn empty_history_has_no_latest_bar() {
        let history = PriceHistory::empty();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn display_name_falls_back_to_unknown() {
        let history = PriceHistory::new(vec![bar()], None);
        assert_eq!(history.display_name_or_default(), "Unknown");

        let named = PriceHistory::new(vec![bar()], Some("Apple Inc.".to_string()));
        assert_eq!(named.display_name_or_default(), "Apple Inc.");
    }

    #[test]
    fn latest_is_the_last_bar() {
        let older = bar();
        let newer = PriceBar {
            timestamp: older.timestamp + chrono::Duration::minutes(1),
            ..older.clone()
        };
        let history = PriceHistory::new(vec![older, newer.clone()], None);
        assert_eq!(history.latest(), Some(&newer));
    }
}
