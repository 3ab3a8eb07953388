// Not every utils is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use uploader::{HttpObjectUploader, HttpTicketClient, UploadFlow};

/// How the stub backend answers
#[derive(Debug, Clone, Copy)]
pub struct StubBehavior {
    pub ticket_status: StatusCode,
    pub put_status: StatusCode,
}

impl Default for StubBehavior {
    fn default() -> Self {
        Self {
            ticket_status: StatusCode::OK,
            put_status: StatusCode::OK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub key: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub ticket_requests: Vec<serde_json::Value>,
    pub puts: Vec<RecordedPut>,
}

#[derive(Clone)]
struct StubState {
    base_url: String,
    behavior: StubBehavior,
    recorded: Arc<Mutex<Recorded>>,
}

/// Issuer and object storage in one in-process server
pub struct StubServer {
    pub base_url: String,
    pub recorded: Arc<Mutex<Recorded>>,
}

impl StubServer {
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let recorded = Arc::new(Mutex::new(Recorded::default()));

        let state = StubState {
            base_url: base_url.clone(),
            behavior,
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/api/upload", post(issue_ticket))
            .route("/bucket/{key}", put(store_object))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, recorded }
    }

    pub fn ticket_requests(&self) -> Vec<serde_json::Value> {
        self.recorded.lock().unwrap().ticket_requests.clone()
    }

    pub fn puts(&self) -> Vec<RecordedPut> {
        self.recorded.lock().unwrap().puts.clone()
    }
}

async fn issue_ticket(
    State(state): State<StubState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state
        .recorded
        .lock()
        .unwrap()
        .ticket_requests
        .push(body.clone());

    if !state.behavior.ticket_status.is_success() {
        return (
            state.behavior.ticket_status,
            Json(json!({ "error": "Failed to generate upload URL" })),
        )
            .into_response();
    }

    let file_name = body["fileName"].as_str().unwrap_or("generated.pdf");
    Json(json!({
        "url": format!("{}/bucket/{}", state.base_url, file_name),
        "fileName": file_name,
    }))
    .into_response()
}

async fn store_object(
    State(state): State<StubState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    state.recorded.lock().unwrap().puts.push(RecordedPut {
        key,
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        body: body.to_vec(),
    });

    state.behavior.put_status
}

/// Flow wired to real HTTP clients pointed at `base_url`
pub fn http_flow(base_url: &str) -> UploadFlow<HttpTicketClient, HttpObjectUploader> {
    let http_client = reqwest::Client::new();
    UploadFlow::new(
        HttpTicketClient::new(base_url, http_client.clone()),
        HttpObjectUploader::new(http_client),
    )
}

/// Base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
