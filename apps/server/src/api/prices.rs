//! The price request handler.
//!
//! Dispatch order is fixed: the symbol is validated before the path is
//! routed, so an invalid symbol on an unrecognized path still yields 400.

use tracing::{error, info, warn};

use pricewire_market_data::{PriceHistory, Symbol};

use crate::error::ApiError;
use crate::main_lib::AppState;
use crate::models::{ApiRequest, ApiResponse, PriceRecord};

use super::routes::{self, Route};

/// Handle one normalized request and produce the response envelope.
pub async fn handle_request(state: &AppState, request: ApiRequest) -> ApiResponse {
    info!("Received request for path: {}", request.path);

    let raw_symbol = request.symbol_parameter();
    let symbol = match Symbol::parse(raw_symbol) {
        Ok(symbol) => symbol,
        Err(err) => {
            warn!("Rejected symbol {:?}: {}", raw_symbol, err);
            return ApiError::InvalidSymbol.into();
        }
    };

    let Some(route) = routes::resolve(&request.path) else {
        warn!("No route matches path: {}", request.path);
        return ApiError::RouteNotFound.into();
    };

    info!("Processing {} for symbol {}", route.path, symbol);
    if route.latest_only {
        live_response(state, &symbol, route).await
    } else {
        historical_response(state, &symbol, route).await
    }
}

/// Serve a historical route: every fetched bar becomes one record.
async fn historical_response(state: &AppState, symbol: &Symbol, route: &Route) -> ApiResponse {
    let history = match state.provider.fetch_history(symbol, &route.range).await {
        Ok(history) => history,
        Err(err) => {
            error!("Fetch failed for {} over {}: {}", symbol, route.range, err);
            return ApiError::from(err).into();
        }
    };

    match map_records(&history) {
        Some(records) => {
            info!("Returning {} records for {}", records.len(), symbol);
            ApiResponse::ok(&records)
        }
        None => ApiError::NoDataFound.into(),
    }
}

/// Serve the live route: only the most recent bar of a 1d/1m snapshot.
///
/// Fetch failures here always surface as an internal error, without the
/// historical route's finer client-error mapping.
async fn live_response(state: &AppState, symbol: &Symbol, route: &Route) -> ApiResponse {
    let history = match state.provider.fetch_history(symbol, &route.range).await {
        Ok(history) => history,
        Err(err) => {
            error!("Live fetch failed for {}: {}", symbol, err);
            return ApiError::Internal.into();
        }
    };

    let Some(records) = map_records(&history) else {
        return ApiError::NoDataFound.into();
    };

    match records.into_iter().next_back() {
        Some(latest) => ApiResponse::ok(&[latest]),
        None => ApiError::NoDataFound.into(),
    }
}

/// Map the fetched history onto wire records, `None` when it is empty.
fn map_records(history: &PriceHistory) -> Option<Vec<PriceRecord>> {
    if history.is_empty() {
        return None;
    }

    let name = history.display_name_or_default();
    Some(
        history
            .bars
            .iter()
            .map(|bar| PriceRecord::from_bar(bar, name))
            .collect(),
    )
}
