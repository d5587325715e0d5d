#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::RwLock, task::JoinHandle};

// ============================================================================
// Fake REST backend
// ============================================================================

/// One request as the backend saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct BackendState {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    responses: Arc<RwLock<HashMap<String, (StatusCode, String)>>>,
}

/// Records every request and answers with canned bodies keyed by path
pub struct FakeBackend {
    pub base_url: String,
    state: BackendState,
    _server: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = BackendState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            _server: server,
        }
    }

    /// Answers `path` with `body` and status 200
    pub async fn respond(&self, path: &str, body: Value) {
        self.respond_raw(path, StatusCode::OK, body.to_string()).await;
    }

    pub async fn respond_raw(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        self.state
            .responses
            .write()
            .await
            .insert(path.to_string(), (status, body.into()));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    /// The single request the backend received; fails if there were more or none
    pub async fn only_request(&self) -> RecordedRequest {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.write().await.push(RecordedRequest {
        method,
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body,
    });

    let (status, body) = state
        .responses
        .read()
        .await
        .get(&path)
        .cloned()
        .unwrap_or_else(|| (StatusCode::OK, "\"ok\"".to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
