use std::collections::HashMap;

use pricewire_market_data::PriceBar;
use serde::{Deserialize, Serialize};

/// Wire format of record timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalized inbound request: the raw path plus its query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub path: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// The raw `symbol` query parameter, empty when absent.
    pub fn symbol_parameter(&self) -> &str {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("symbol"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Response envelope returned by the request handler.
///
/// Constructed once per request and never mutated; `body` is always a
/// JSON-encoded payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// One price bar in the wire schema, enriched with the instrument name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub dividends: f64,
    pub stock_splits: f64,
    pub name: String,
}

impl PriceRecord {
    pub fn from_bar(bar: &PriceBar, name: &str) -> Self {
        Self {
            date: bar.timestamp.format(DATE_FORMAT).to_string(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            dividends: bar.dividends,
            stock_splits: bar.stock_splits,
            name: name.to_string(),
        }
    }
}
