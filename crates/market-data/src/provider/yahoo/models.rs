//! Yahoo Finance quoteSummary API response models.
//!
//! Trimmed to the `price` module fields the provider reads for the
//! instrument display name.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Vec<YahooQuoteSummaryResult>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_price_module_names() {
        let json = r#"{
            "quoteSummary": {
                "result": [
                    {
                        "price": {
                            "shortName": "Apple Inc.",
                            "longName": "Apple Inc.",
                            "currency": "USD",
                            "regularMarketPrice": {"raw": 189.87, "fmt": "189.87"}
                        }
                    }
                ]
            }
        }"#;
        let data: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let price = data.quote_summary.result[0].price.as_ref().unwrap();
        assert_eq!(price.long_name.as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn deserializes_missing_names_as_none() {
        let json = r#"{"quoteSummary": {"result": [{"price": {"currency": "USD"}}]}}"#;
        let data: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let price = data.quote_summary.result[0].price.as_ref().unwrap();
        assert!(price.long_name.is_none());
        assert!(price.short_name.is_none());
    }

    #[test]
    fn deserializes_empty_result_list() {
        let json = r#"{"quoteSummary": {"result": []}}"#;
        let data: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(data.quote_summary.result.is_empty());
    }
}
