//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use product_dashboard::config::DashboardConfig;
use product_dashboard::dashboard::ProxyClient;
use product_dashboard::http::HttpServer;
use product_dashboard::lifecycle::Shutdown;

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

type Responder = Arc<dyn Fn(&RecordedCall) -> (u16, Value) + Send + Sync>;

#[derive(Clone)]
struct BackendState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    respond: Responder,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}/api/web/v1", self.addr)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: Method, path_suffix: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.path.ends_with(path_suffix))
            .collect()
    }
}

/// Start a programmable mock backend; `respond` picks status and JSON body.
pub async fn start_programmable_backend<F>(respond: F) -> MockBackend
where
    F: Fn(&RecordedCall) -> (u16, Value) + Send + Sync + 'static,
{
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        calls: calls.clone(),
        respond: Arc::new(respond),
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(record).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { addr, calls }
}

async fn record(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let query = url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect();
    let call = RecordedCall {
        method,
        path: uri.path().to_string(),
        query,
        body: serde_json::from_slice(&body).ok(),
    };

    let (status, value) = (state.respond)(&call);
    state.calls.lock().unwrap().push(call);

    let status = StatusCode::from_u16(status).unwrap();
    (status, Json(value)).into_response()
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn proxy_config(backend_base_url: &str) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.backend.base_url = backend_base_url.into();
    config.backend.timeout_secs = 2;
    config
}

/// Run the proxy on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn start_proxy(backend_base_url: &str) -> (String, Shutdown) {
    let server = HttpServer::new(proxy_config(backend_base_url)).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{addr}"), shutdown)
}

/// Client for a test proxy, bypassing any system HTTP proxy.
#[allow(dead_code)]
pub fn proxy_client(proxy_url: &str) -> ProxyClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    ProxyClient::with_client(client, proxy_url).unwrap()
}
