#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use parliament_data_gateway::config::{AppConfig, DataMode};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub fn config(mode: DataMode, api_url: &str, data_path: &Path) -> AppConfig {
    AppConfig {
        mode,
        api_url: api_url.to_string(),
        data_path: data_path.to_path_buf(),
        disable_proxy: true,
    }
}

pub fn write_json(dir: &Path, file: &str, value: &Value) {
    let body = serde_json::to_vec_pretty(value).expect("serialise fixture");
    std::fs::write(dir.join(file), body).expect("write fixture");
}

#[derive(Clone)]
enum MockResponse {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

/// Backend stand-in keyed by raw (still percent-encoded) request path.
#[derive(Clone, Default)]
pub struct MockBackend {
    responses: HashMap<String, MockResponse>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(path.to_string(), MockResponse::Json(StatusCode::OK, body));
        self
    }

    pub fn with_status(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        self.responses
            .insert(path.to_string(), MockResponse::Json(status, body));
        self
    }

    pub fn with_text(mut self, path: &str, status: StatusCode, body: &'static str) -> Self {
        self.responses
            .insert(path.to_string(), MockResponse::Text(status, body));
        self
    }

    /// Starts serving on an ephemeral port and returns the base URL.
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(respond).with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");

        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                eprintln!("mock backend error: {err}");
            }
        });

        format!("http://{addr}")
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

async fn respond(State(backend): State<MockBackend>, uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|value| value.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    backend.requests.lock().await.push(target);

    match backend.responses.get(uri.path()) {
        Some(MockResponse::Json(status, body)) => (*status, Json(body.clone())).into_response(),
        Some(MockResponse::Text(status, body)) => (*status, *body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "erro": "rota desconhecida"})),
        )
            .into_response(),
    }
}
