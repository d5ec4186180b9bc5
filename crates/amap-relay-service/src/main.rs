//! Amap relay HTTP service.
//!
//! Forwards district, POI search, and POI detail lookups to the Amap REST
//! API, injecting the configured API key and relaying the provider's JSON
//! envelope to the caller unchanged.
//!
//! # Endpoints
//!
//! - `GET /api/v1/districts` - Administrative district lookup
//! - `GET /api/v1/search` - POI keyword search
//! - `GET /api/v1/poi/{poi_id}` - POI detail lookup
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `AMAP_KEY` - Provider API key (required)
//! - `AMAP_BASE_URL` - Provider base URL (default: https://restapi.amap.com/v3)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//!
//! Variables may also be supplied through a local `.env` file.

use std::env;
use std::net::SocketAddr;

use tracing::info;

use amap_relay_lib::{AmapClient, Settings};

use crate::logging::{init_logging, LoggingConfig};
use crate::routes::router;
use crate::state::AppState;

mod health;
mod logging;
mod reply;
mod request;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up AMAP_KEY and friends from a local .env file if present.
    dotenvy::dotenv().ok();

    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // A missing API key must fail here, before any traffic is served.
    let settings = Settings::from_env()?;
    info!(
        base_url = settings.base_url(),
        port = port,
        "starting amap relay service"
    );

    let client = AmapClient::new(settings)?;
    let state = AppState::new(client);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
