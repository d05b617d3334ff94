pub mod health;
pub mod inquiry;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                           liveness marker (GET)
/// /inquiry                                         submit inquiry (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(health::hello))
        .nest("/inquiry", inquiry::router())
}
