//! Common test utilities: an in-process stand-in for the Amap REST API.
//!
//! The stub binds an ephemeral local port, records every request it
//! receives, and replies with the envelope configured for the request path
//! (or a minimal success envelope when none was configured).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One recorded provider request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, Value>>>,
}

/// In-process stub of the Amap REST API.
pub struct StubProvider {
    addr: SocketAddr,
    state: StubState,
}

impl StubProvider {
    /// Bind an ephemeral port and start serving the stub.
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub provider");
        let addr = listener.local_addr().expect("stub provider address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub provider");
        });

        Self { addr, state }
    }

    /// Base URL to hand to `Settings` under test.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Configure the envelope returned for `path`.
    pub fn respond_with(&self, path: &str, envelope: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), envelope);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<StubState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        params,
    });

    let envelope = state
        .responses
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| json!({"status": "1", "info": "OK"}));
    Json(envelope)
}
