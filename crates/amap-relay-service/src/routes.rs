//! Route table and request handlers for the relay.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::health::{health_live, health_ready};
use crate::reply::ErrorReply;
use crate::request::{DistrictQuery, SearchQuery, Validate};
use crate::state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/districts", get(districts))
        .route("/api/v1/search", get(search))
        .route("/api/v1/poi/{poi_id}", get(poi_detail))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle GET /api/v1/districts.
async fn districts(
    State(state): State<AppState>,
    Query(query): Query<DistrictQuery>,
) -> Result<Json<Value>, ErrorReply> {
    let request_id = generate_request_id();
    info!(
        request_id = %request_id,
        keywords = %query.keywords,
        "handling district lookup"
    );

    let envelope = state
        .client()
        .get_districts(&query.keywords)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "district lookup failed");
            ErrorReply::from(e)
        })?;

    Ok(Json(envelope))
}

/// Handle GET /api/v1/search.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ErrorReply> {
    let request_id = generate_request_id();
    info!(
        request_id = %request_id,
        keywords = %query.keywords,
        page = query.page,
        offset = query.offset,
        sortrule = %query.sortrule,
        "handling poi search"
    );

    query.validate()?;

    let envelope = state
        .client()
        .search_poi(&query.to_search())
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "poi search failed");
            ErrorReply::from(e)
        })?;

    Ok(Json(envelope))
}

/// Handle GET /api/v1/poi/{poi_id}.
async fn poi_detail(
    State(state): State<AppState>,
    Path(poi_id): Path<String>,
) -> Result<Json<Value>, ErrorReply> {
    let request_id = generate_request_id();
    info!(
        request_id = %request_id,
        poi_id = %poi_id,
        "handling poi detail lookup"
    );

    let envelope = state
        .client()
        .get_poi_detail(&poi_id)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "poi detail lookup failed");
            ErrorReply::from(e)
        })?;

    Ok(Json(envelope))
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("req-{:x}", timestamp)
}
