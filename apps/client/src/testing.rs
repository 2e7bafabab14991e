//! Test doubles shared by the flow tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::api_client::{ApiClient, ApiError, ApiTransport};
use crate::config::Config;
use crate::guard::InFlight;
use crate::session::Session;
use crate::state::AppState;

enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Records every request and answers with a canned reply.
/// With `gated()`, each call waits for `release()` before answering.
pub struct FakeTransport {
    calls: Mutex<Vec<(String, Value)>>,
    reply: Reply,
    gate: Option<Arc<Notify>>,
    entered: Arc<Notify>,
}

impl FakeTransport {
    pub fn replying(body: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Json(body),
            gate: None,
            entered: Arc::new(Notify::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Reply::Status(status, message.to_string()),
            ..Self::replying(Value::Null)
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Resolves once a request has reached the transport.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push((path.to_string(), body));
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Status(status, message) => Err(ApiError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// State wired to `transport`, with the session stored under `dir`.
pub fn test_state(transport: Arc<FakeTransport>, dir: &Path) -> AppState {
    let config = Config {
        api_base_url: "http://localhost:8088/api/v1".to_string(),
        session_file: dir.join("storage.json"),
        export_dir: dir.to_path_buf(),
        rust_log: "warn".to_string(),
    };
    AppState {
        api: ApiClient::with_transport(transport),
        session: Arc::new(Session::open(config.session_file.clone())),
        flights: InFlight::new(),
        config,
    }
}
