use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::Router;
use async_trait::async_trait;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use pawsona_api::config::ServerConfig;
use pawsona_api::routes;
use pawsona_api::state::AppState;
use pawsona_core::error::CoreResult;
use pawsona_db::memory::{MemoryJobStore, MemoryRedemptionStore};
use pawsona_provider::{ImageProvider, TaskState};
use pawsona_worker::WorkerConfig;

/// Provider double that replays scripted submit and query results.
///
/// An empty query script answers `InProgress` forever, which together
/// with the short test polling ceiling exercises the "still processing"
/// path.
pub struct StubProvider {
    submits: Mutex<VecDeque<CoreResult<String>>>,
    queries: Mutex<VecDeque<CoreResult<TaskState>>>,
}

impl StubProvider {
    pub fn new(submits: Vec<CoreResult<String>>, queries: Vec<CoreResult<TaskState>>) -> Self {
        Self {
            submits: Mutex::new(submits.into()),
            queries: Mutex::new(queries.into()),
        }
    }

    /// A provider that immediately succeeds with a fixed image.
    pub fn instant_success() -> Self {
        Self::new(
            vec![Ok("task-stub".to_string())],
            vec![Ok(TaskState::Succeeded("https://cdn.test/card.png".to_string()))],
        )
    }
}

#[async_trait]
impl ImageProvider for StubProvider {
    async fn submit(&self, _prompt: &str, _pet_image: &str) -> CoreResult<String> {
        self.submits
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("task-stub".to_string()))
    }

    async fn query(&self, _task_id: &str) -> CoreResult<TaskState> {
        self.queries
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(TaskState::InProgress))
    }
}

/// Handles to the stores behind a test app, for seeding and assertions.
pub struct TestStores {
    pub jobs: Arc<MemoryJobStore>,
    pub codes: Arc<MemoryRedemptionStore>,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        code_prefix: "PET".to_string(),
    }
}

/// Build the full application router over in-memory stores and the
/// given provider double.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(provider: StubProvider) -> (Router, TestStores) {
    let jobs = Arc::new(MemoryJobStore::new());
    let codes = Arc::new(MemoryRedemptionStore::new());

    let state = AppState {
        jobs: Arc::clone(&jobs) as Arc<dyn pawsona_db::store::JobStore>,
        codes: Arc::clone(&codes) as Arc<dyn pawsona_db::store::RedemptionStore>,
        provider: Arc::new(provider),
        // Millisecond cadence keeps polling-path tests fast.
        worker: WorkerConfig {
            poll_interval: Duration::from_millis(1),
            poll_ceiling: Duration::from_millis(30),
        },
        pool: None,
        config: Arc::new(test_config()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    (app, TestStores { jobs, codes })
}

/// Send a JSON POST and return (status, parsed body).
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a GET and return (status, parsed body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a DELETE and return (status, parsed body).
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
