//! Route definitions for inquiry submission.
//!
//! Mounted at `/inquiry` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Inquiry routes.
///
/// ```text
/// POST   /                  -> submit_inquiry
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(inquiry::submit_inquiry))
}
