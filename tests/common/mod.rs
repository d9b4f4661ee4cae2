//! Local stand-in for a chat-completion provider

#![allow(dead_code)]

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use llm_translator::{Result, TranslationClient, TranslationConfig};

/// What the provider saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct ProviderState {
    status: StatusCode,
    reply: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeProvider {
    pub url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeProvider {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> TranslationConfig {
        TranslationConfig::new("test_key", self.url.clone(), "test-model", 0.7, 256)
    }

    pub fn client(&self) -> TranslationClient {
        client_for(self.config()).unwrap()
    }
}

/// Build a translation client that never routes through a system proxy
pub fn client_for(config: TranslationConfig) -> Result<TranslationClient> {
    TranslationClient::with_http_client(config, http_client())
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn complete(
    State(state): State<ProviderState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });

    (state.status, state.reply.clone())
}

/// Serve `reply` with `status` for every POST to `/v1/chat/completions`
pub async fn spawn_provider(status: StatusCode, reply: impl Into<String>) -> FakeProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = ProviderState {
        status,
        reply: reply.into(),
        hits: hits.clone(),
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(complete))
        .with_state(state);

    let addr = serve(app).await;

    FakeProvider {
        url: format!("http://{}/v1/chat/completions", addr),
        hits,
        requests,
    }
}

/// Bind `app` on an ephemeral local port and serve it in the background
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}
