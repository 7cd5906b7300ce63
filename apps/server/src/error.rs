use axum::http::StatusCode;
use pricewire_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

use crate::models::ApiResponse;

/// Error taxonomy for the price API.
///
/// Each variant carries its exact wire message; the envelope body for a
/// failed request is always `{"error": <message>}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid stock symbol")]
    InvalidSymbol,
    #[error("Route not found")]
    RouteNotFound,
    #[error("No data found for the provided stock symbol.")]
    NoDataFound,
    #[error("Missing data field: {0}")]
    MissingField(String),
    #[error("{0}")]
    InvalidValue(String),
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidSymbol | ApiError::MissingField(_) | ApiError::InvalidValue(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RouteNotFound | ApiError::NoDataFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        ApiResponse::with_status(
            err.status_code(),
            &ErrorBody {
                error: err.to_string(),
            },
        )
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidSymbol { .. } => ApiError::InvalidSymbol,
            MarketDataError::MissingField { field } => ApiError::MissingField(field.to_string()),
            MarketDataError::InvalidValue { message } => ApiError::InvalidValue(message),
            MarketDataError::Provider { .. } | MarketDataError::Network(_) => ApiError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(ApiError::InvalidSymbol.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NoDataFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MissingField("close".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidValue("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn wire_messages_are_exact() {
        assert_eq!(ApiError::InvalidSymbol.to_string(), "Invalid stock symbol");
        assert_eq!(ApiError::RouteNotFound.to_string(), "Route not found");
        assert_eq!(
            ApiError::NoDataFound.to_string(),
            "No data found for the provided stock symbol."
        );
        assert_eq!(
            ApiError::MissingField("close".into()).to_string(),
            "Missing data field: close"
        );
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn fetch_errors_map_onto_the_taxonomy() {
        assert_eq!(
            ApiError::from(MarketDataError::MissingField { field: "open" }),
            ApiError::MissingField("open".into())
        );
        assert_eq!(
            ApiError::from(MarketDataError::InvalidValue {
                message: "Invalid timestamp: -1".into()
            }),
            ApiError::InvalidValue("Invalid timestamp: -1".into())
        );
        assert_eq!(
            ApiError::from(MarketDataError::Provider {
                provider: "YAHOO".into(),
                message: "boom".into()
            }),
            ApiError::Internal
        );
    }

    #[test]
    fn error_envelope_body_is_an_error_object() {
        let response = ApiResponse::from(ApiError::NoDataFound);
        assert_eq!(response.status_code, 404);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            body["error"],
            "No data found for the provided stock symbol."
        );
    }
}
