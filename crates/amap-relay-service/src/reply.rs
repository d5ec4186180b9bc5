//! Client-facing error reply.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use amap_relay_lib::Error as LibError;

/// Flat error body returned for every failed request.
///
/// Invalid input, upstream failures, and transport failures all map to HTTP
/// 400 with a plain message; callers are not given structured error codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    /// Human-readable description of the failure.
    pub detail: String,
}

impl ErrorReply {
    /// Create a reply with the given message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl From<LibError> for ErrorReply {
    fn from(error: LibError) -> Self {
        Self::new(error.to_string())
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_reply_serialization() {
        let reply = ErrorReply::new("poi search failed: INVALID_USER_KEY");
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(
            json,
            r#"{"detail":"poi search failed: INVALID_USER_KEY"}"#
        );
    }

    #[test]
    fn test_error_reply_from_lib_error() {
        let reply = ErrorReply::from(LibError::Upstream {
            operation: "district lookup",
            info: "DAILY_QUERY_OVER_LIMIT".to_string(),
        });
        assert!(reply.detail.contains("district lookup"));
        assert!(reply.detail.contains("DAILY_QUERY_OVER_LIMIT"));
    }
}
