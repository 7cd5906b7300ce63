//! HTTP surface of the price API.
//!
//! The dispatch contract is path-based rather than method/pattern-based, so
//! the router funnels every request through one fallback handler that
//! normalizes it into an [`ApiRequest`], runs the price handler and converts
//! the resulting envelope back into an HTTP response verbatim.

mod prices;
mod response;
mod routes;

pub use prices::handle_request;

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::error;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{ApiRequest, ApiResponse},
};

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let api_request = ApiRequest {
        path: request.uri().path().to_string(),
        query_string_parameters: request.uri().query().and_then(parse_query),
    };
    let envelope = prices::handle_request(&state, api_request).await;
    into_http(envelope)
}

fn parse_query(query: &str) -> Option<HashMap<String, String>> {
    serde_urlencoded::from_str(query).ok()
}

fn into_http(envelope: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json");
    for (name, value) in &envelope.headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => builder = builder.header(name, value),
            _ => error!("Skipping invalid response header: {}", name),
        }
    }

    match builder.body(Body::from(envelope.body)) {
        Ok(response) => response,
        Err(err) => {
            error!("Failed to build HTTP response: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
