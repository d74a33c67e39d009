//! In-process mock of the Mem0 API: records every request, replays scripted responses in order.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use mem0_client::{ClientConfig, MemoryClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
struct Inner {
    requests: Vec<Recorded>,
    responses: VecDeque<(StatusCode, String)>,
}

type Shared = Arc<Mutex<Inner>>;

#[derive(Clone)]
pub struct MockServer {
    pub base_url: String,
    inner: Shared,
}

impl MockServer {
    pub async fn start() -> Self {
        init_tracing();
        let inner: Shared = Arc::new(Mutex::new(Inner::default()));
        let app = Router::new().fallback(handle).with_state(Arc::clone(&inner));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });
        Self {
            base_url: format!("http://{}", addr),
            inner,
        }
    }

    /// Queue a raw response.
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back((StatusCode::from_u16(status).unwrap(), body.into()));
    }

    /// Queue a 200 JSON response.
    pub fn respond_json(&self, value: serde_json::Value) {
        self.respond(200, value.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new("test-key").with_host(self.base_url.clone())
    }

    pub fn client(&self) -> MemoryClient {
        MemoryClient::new(self.config()).unwrap()
    }
}

async fn handle(
    State(inner): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    let mut guard = inner.lock().unwrap();
    guard.requests.push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        headers,
        body,
    });
    guard.responses.pop_front().unwrap_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "no scripted response".to_string(),
    ))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
