//! Application state shared by the relay handlers.

use std::sync::Arc;

use amap_relay_lib::AmapClient;

/// Shared state for all axum handlers.
///
/// Cheaply cloneable; the client (and the settings it owns) is read-only
/// from every request's perspective, so no locking is needed.
#[derive(Clone, Debug)]
pub struct AppState {
    client: Arc<AmapClient>,
}

impl AppState {
    /// Wrap a constructed upstream client.
    pub fn new(client: AmapClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the upstream client.
    pub fn client(&self) -> &AmapClient {
        &self.client
    }
}
