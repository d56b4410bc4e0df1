//! Shared test fixtures.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use bytes::Bytes;
use ix_01_request_auth::{signed_message, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use ix_runtime::{RelayConfig, RelayRuntime};
use serde_json::Value;
use shared_crypto::Ed25519KeyPair;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TIMESTAMP: &str = "1700000000";
pub const APPLICATION_ID: &str = "1234567890";
pub const BOT_TOKEN: &str = "test-bot-token";

/// Application keypair; the relay is configured with its public half.
pub fn keypair() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([0x42; 32])
}

/// Relay configuration trusting [`keypair`] and talking to `api_base`.
pub fn relay_config(api_base: Option<&str>) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.public_key = Some(keypair().public_key().to_hex());
    config.application_id = Some(APPLICATION_ID.to_string());
    config.rest.token = Some(BOT_TOKEN.to_string());
    if let Some(base) = api_base {
        config.rest.base_url = base.to_string();
    }
    config
}

/// Runtime with the built-in commands, signed by [`keypair`].
pub fn relay(api_base: Option<&str>) -> RelayRuntime {
    RelayRuntime::new(relay_config(api_base)).unwrap()
}

pub fn sign(keypair: &Ed25519KeyPair, timestamp: &str, body: &[u8]) -> String {
    keypair.sign(&signed_message(timestamp, body)).to_hex()
}

/// POST to `/interactions` signed by [`keypair`].
pub fn signed_request(body: &[u8]) -> Request<Body> {
    request_with(body, Some(sign(&keypair(), TIMESTAMP, body)), Some(TIMESTAMP))
}

/// POST to `/interactions` with explicit headers.
pub fn request_with(
    body: &[u8],
    signature: Option<String>,
    timestamp: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::post("/interactions").header("content-type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    if let Some(timestamp) = timestamp {
        builder = builder.header(TIMESTAMP_HEADER, timestamp);
    }
    builder.body(Body::from(body.to_vec())).unwrap()
}

/// Status and body; the body is JSON when it parses, otherwise a string.
pub async fn read_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

/// One request seen by the [`FakePlatform`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local HTTP server standing in for the platform REST API.
///
/// Records every request and answers each with the configured status and
/// an empty JSON list.
pub struct FakePlatform {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakePlatform {
    pub async fn start(status: StatusCode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            requests: Arc::clone(&requests),
        };
        let router = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method,
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.requests.lock().unwrap().push(recorded);

    (state.status, Json(Value::Array(vec![])))
}
