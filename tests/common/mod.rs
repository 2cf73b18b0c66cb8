//! A stand-in for the BRAMON operator API, served on an ephemeral local port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use bramon_gallery::query::QueryParams;
use bramon_gallery::radiants::RadiantCatalog;
use bramon_gallery::web::{AppState, Config};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub query: QueryParams,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    stations: Value,
    captures: Value,
}

pub struct MockBramon {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBramon {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self, path: &str) -> RecordedRequest {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.path == path)
            .unwrap_or_else(|| panic!("no request to {}", path))
    }
}

pub fn stations_body() -> Value {
    json!({
        "data": [
            {"id": 5, "name": "CAP1 Capivari"},
            {"id": 7, "name": "TLN2 Tatui"}
        ]
    })
}

pub fn captures_body(current_page: u32, last_page: u32) -> Value {
    json!({
        "current_page": current_page,
        "last_page": last_page,
        "data": [
            {
                "id": 101,
                "class": "PER",
                "captured_at": "2021-08-12 03:21:45",
                "station": {"id": 5, "name": "CAP1 Capivari"},
                "files": [
                    {"filename": "M20210812_032145_CAP1P.jpg", "url": "https://cdn.example/M20210812_032145_CAP1P.jpg"},
                    {"filename": "M20210812_032145_CAP1T.jpg", "url": "https://cdn.example/M20210812_032145_CAP1T.jpg"}
                ]
            },
            {
                "id": 102,
                "class": null,
                "captured_at": "2021-08-12T04:00:01Z",
                "station": {"id": 7, "name": "TLN2 Tatui"},
                "files": [
                    {"filename": "M20210812_040001_TLN2T.jpg", "url": "https://cdn.example/M20210812_040001_TLN2T.jpg"}
                ]
            },
            {
                "id": 103,
                "captured_at": "2021-08-12 05:00:00",
                "station": {"id": 7, "name": "TLN2 Tatui"},
                "files": [
                    {"filename": "M20210812_050000_TLN2.txt", "url": "https://cdn.example/M20210812_050000_TLN2.txt"}
                ]
            }
        ]
    })
}

pub async fn spawn_mock(status: StatusCode, stations: Value, captures: Value) -> MockBramon {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        status,
        stations,
        captures,
    };

    let app = Router::new()
        .route("/v1/operator/stations", get(mock_stations))
        .route("/v1/operator/captures", get(mock_captures))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBramon {
        base_url: format!("http://{}/v1/", addr),
        requests,
    }
}

pub async fn spawn_default_mock() -> MockBramon {
    spawn_mock(StatusCode::OK, stations_body(), captures_body(1, 1)).await
}

fn record(state: &MockState, path: &'static str, headers: &HeaderMap, raw: Option<String>) {
    state.requests.lock().unwrap().push(RecordedRequest {
        path,
        query: raw.as_deref().map(QueryParams::parse).unwrap_or_default(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });
}

async fn mock_stations(
    State(state): State<MockState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> (StatusCode, Json<Value>) {
    record(&state, "stations", &headers, raw);
    (state.status, Json(state.stations.clone()))
}

async fn mock_captures(
    State(state): State<MockState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> (StatusCode, Json<Value>) {
    record(&state, "captures", &headers, raw);
    (state.status, Json(state.captures.clone()))
}

/// A base URL nothing listens on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1/", addr)
}

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.bramon.base_url = base_url.to_string();
    config.bramon.api_key = API_KEY.to_string();
    config.bramon.connect_timeout = Duration::from_secs(2);
    config.bramon.timeout = Duration::from_secs(5);
    config
}

pub fn test_state(base_url: &str) -> AppState {
    let radiants = RadiantCatalog::parse("QUA:Quadrantids\nPER:Perseids\nGEM:Geminids");
    AppState::new(test_config(base_url), radiants).unwrap()
}
