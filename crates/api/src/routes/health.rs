use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use eventdesk_core::store::HealthStatus;
use eventdesk_core::text::{truncate_detail, MAX_ERROR_DETAIL_CHARS};

use crate::state::AppState;

/// Liveness marker payload.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Storage connectivity snapshot returned by `GET /test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    /// Human-readable database state, with any error text truncated.
    pub database: String,
    /// Whether a database URL is configured.
    pub database_url: &'static str,
    /// The connected database's name, or whether `DATABASE_NAME` is set
    /// when there is no connection.
    pub database_name: String,
    pub connection_status: &'static str,
    /// Up to ten table names.
    pub collections: Vec<String>,
}

/// GET / -- liveness marker.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Event Planning Backend Running",
    })
}

/// GET /api/hello -- liveness marker under the API prefix.
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// GET /test -- probe the store and report what it says.
async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let status = state.store.ping().await;
    let database_config = &state.config.database;

    let configured_name = if database_config.name.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let connection_status = if status.is_connected() {
        "Connected"
    } else {
        "Not Connected"
    };

    let (database, database_name, collections) = match status {
        HealthStatus::Healthy {
            database,
            collections,
        } => ("✅ Connected & Working".to_string(), database, collections),
        HealthStatus::Degraded { database, error } => (
            format!(
                "⚠️  Connected but Error: {}",
                truncate_detail(&error, MAX_ERROR_DETAIL_CHARS)
            ),
            database,
            Vec::new(),
        ),
        HealthStatus::Unavailable { error } => (
            format!(
                "❌ Error: {}",
                truncate_detail(&error, MAX_ERROR_DETAIL_CHARS)
            ),
            configured_name.to_string(),
            Vec::new(),
        ),
    };

    Json(DiagnosticsResponse {
        backend: "✅ Running",
        database,
        database_url: if database_config.url.is_empty() {
            "❌ Not Set"
        } else {
            "✅ Set"
        },
        database_name,
        connection_status,
        collections,
    })
}

/// Mount the root-level routes (not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
}
