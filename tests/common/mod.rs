//! In-process mock of the config service for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use remote_config::{ClientSettings, JsonObject};

/// Body key the mock strips and sleeps on before applying a PATCH.
#[allow(dead_code)]
pub const DELAY_KEY: &str = "delay_ms";

/// Shared state of the mock service. Statuses default to 200.
pub struct MockService {
    pub sections: Mutex<HashMap<String, JsonObject>>,
    pub get_status: AtomicU16,
    pub patch_status: AtomicU16,
    /// Headers of every request, in arrival order.
    pub headers: Mutex<Vec<HeaderMap>>,
    /// PATCH bodies in the order the mock applied them.
    pub applied: Mutex<Vec<(String, JsonObject)>>,
}

#[allow(dead_code)]
impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sections: Mutex::new(HashMap::new()),
            get_status: AtomicU16::new(200),
            patch_status: AtomicU16::new(200),
            headers: Mutex::new(Vec::new()),
            applied: Mutex::new(Vec::new()),
        })
    }

    pub fn with_section(self: Arc<Self>, name: &str, body: Value) -> Arc<Self> {
        let object = body.as_object().cloned().expect("section body must be an object");
        self.sections.lock().unwrap().insert(name.to_string(), object);
        self
    }

    pub fn section(&self, name: &str) -> Option<JsonObject> {
        self.sections.lock().unwrap().get(name).cloned()
    }

    pub fn applied(&self) -> Vec<(String, JsonObject)> {
        self.applied.lock().unwrap().clone()
    }

    pub fn last_headers(&self) -> HeaderMap {
        self.headers.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

async fn get_section(
    State(service): State<Arc<MockService>>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    service.headers.lock().unwrap().push(headers);

    let status = StatusCode::from_u16(service.get_status.load(Ordering::SeqCst)).unwrap();
    let body = service.section(&name).unwrap_or_default();
    (status, Json(Value::Object(body)))
}

async fn patch_section(
    State(service): State<Arc<MockService>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(mut partial): Json<JsonObject>,
) -> (StatusCode, Json<Value>) {
    service.headers.lock().unwrap().push(headers);

    if let Some(delay) = partial.remove(DELAY_KEY).and_then(|v| v.as_u64()) {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let status = StatusCode::from_u16(service.patch_status.load(Ordering::SeqCst)).unwrap();
    let body = {
        let mut sections = service.sections.lock().unwrap();
        let entry = sections.entry(name.clone()).or_default();
        if status == StatusCode::OK {
            for (key, value) in &partial {
                entry.insert(key.clone(), value.clone());
            }
            service.applied.lock().unwrap().push((name, partial));
        }
        entry.clone()
    };

    (status, Json(Value::Object(body)))
}

/// Serve `service` on an ephemeral local port.
pub async fn start_mock_service(service: Arc<MockService>) -> SocketAddr {
    let app = Router::new()
        .route("/api/config/{name}", get(get_section).patch(patch_section))
        .with_state(service);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Settings pointed at a mock, bypassing any proxy env vars.
pub fn settings_for(addr: SocketAddr) -> ClientSettings {
    let mut settings = ClientSettings::with_base_url(format!("http://{}/", addr));
    settings.system_proxy = false;
    settings
}

/// Unwrap a `json!({...})` literal into an object.
#[allow(dead_code)]
pub fn object(value: Value) -> JsonObject {
    value.as_object().cloned().expect("not an object")
}
