//! Health probe handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Probe response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok" while the process is serving.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Configured provider base URL (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            provider: None,
        }
    }

    /// Create a ready status carrying the configured provider.
    pub fn ready(service: &str, version: &str, provider: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            provider: Some(provider.to_string()),
        }
    }
}

/// Liveness probe: the process is up.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe: configuration is loaded and the relay can serve.
///
/// The settings are validated before the router is built, so a serving
/// process is always ready; the probe reports which provider it relays to.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.client().settings().base_url(),
    );
    (StatusCode::OK, Json(status))
}
