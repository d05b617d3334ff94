#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use eventdesk_api::config::{DatabaseConfig, ServerConfig};
use eventdesk_api::notifications::{Notifier, NotifierConfig};
use eventdesk_api::router::build_app_router;
use eventdesk_api::state::AppState;
use eventdesk_core::error::StorageError;
use eventdesk_core::inquiry::Inquiry;
use eventdesk_core::store::{HealthStatus, InquiryStore};
use eventdesk_core::types::InquiryId;

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// In-memory store that records every inserted inquiry.
#[derive(Default)]
pub struct RecordingStore {
    next_id: AtomicU64,
    records: Mutex<Vec<(InquiryId, Inquiry)>>,
}

impl RecordingStore {
    pub fn records(&self) -> Vec<(InquiryId, Inquiry)> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl InquiryStore for RecordingStore {
    async fn insert(&self, inquiry: &Inquiry) -> Result<InquiryId, StorageError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = InquiryId::new(format!("mem-{n:06}"));
        self.records
            .lock()
            .unwrap()
            .push((id.clone(), inquiry.clone()));
        Ok(id)
    }

    async fn ping(&self) -> HealthStatus {
        HealthStatus::Healthy {
            database: "memory".to_string(),
            collections: vec!["inquiries".to_string()],
        }
    }
}

/// A store whose every operation fails with a long error message.
pub struct FailingStore;

/// Longer than the client-facing detail limit on purpose.
pub const FAILING_STORE_ERROR: &str =
    "connection to server at 10.0.0.7 port 5432 failed: server closed the connection unexpectedly";

#[async_trait]
impl InquiryStore for FailingStore {
    async fn insert(&self, _inquiry: &Inquiry) -> Result<InquiryId, StorageError> {
        Err(StorageError::Unavailable(FAILING_STORE_ERROR.to_string()))
    }

    async fn ping(&self) -> HealthStatus {
        HealthStatus::Unavailable {
            error: FAILING_STORE_ERROR.to_string(),
        }
    }
}

/// A store that connects but cannot enumerate its tables.
pub struct DegradedStore;

#[async_trait]
impl InquiryStore for DegradedStore {
    async fn insert(&self, _inquiry: &Inquiry) -> Result<InquiryId, StorageError> {
        Ok(InquiryId::new("degraded-000001"))
    }

    async fn ping(&self) -> HealthStatus {
        HealthStatus::Degraded {
            database: "eventdesk".to_string(),
            error: FAILING_STORE_ERROR.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://eventdesk@localhost/eventdesk".to_string(),
            name: None,
            acquire_timeout_secs: 1,
        },
        notifier: NotifierConfig::default(),
    }
}

/// Build the full application router around `store`, with no notification
/// recipients configured.
pub fn build_test_app(store: Arc<dyn InquiryStore>) -> Router {
    build_test_app_with(store, test_config())
}

/// Build the full application router around `store` with a custom config.
pub fn build_test_app_with(store: Arc<dyn InquiryStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        notifier: Arc::new(Notifier::new(config.notifier.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The Anna scenario payload: every required field, no optionals.
pub fn anna() -> serde_json::Value {
    serde_json::json!({
        "name": "Anna",
        "email": "anna@example.com",
        "phone": "12345678",
        "event_type": "wedding",
        "package": "gold"
    })
}
