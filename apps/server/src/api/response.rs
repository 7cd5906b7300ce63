//! Response envelope builder.
//!
//! Every response, success or error, carries the same three CORS headers
//! and a JSON-encoded body.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::models::ApiResponse;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
];

impl ApiResponse {
    /// Build an envelope with the given status, serializing the payload.
    pub fn with_status<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Self {
        let body = serde_json::to_string(payload).unwrap_or_else(|err| {
            error!("Failed to serialize response body: {}", err);
            json!({"error": "Internal server error"}).to_string()
        });

        Self {
            status_code: status.as_u16(),
            headers: CORS_HEADERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body,
        }
    }

    /// Build a 200 envelope around the payload.
    pub fn ok<T: Serialize + ?Sized>(payload: &T) -> Self {
        Self::with_status(StatusCode::OK, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_exactly_the_cors_headers() {
        let response = ApiResponse::ok(&Vec::<u8>::new());
        assert_eq!(response.headers.len(), 3);
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin"),
            Some(&"*".to_string())
        );
        assert_eq!(
            response.headers.get("Access-Control-Allow-Headers"),
            Some(
                &"Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
                    .to_string()
            )
        );
        assert_eq!(
            response.headers.get("Access-Control-Allow-Methods"),
            Some(&"GET, OPTIONS".to_string())
        );
    }

    #[test]
    fn body_is_json_encoded() {
        let response = ApiResponse::ok(&vec!["a", "b"]);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"["a","b"]"#);
    }
}
