//! Handler for inquiry submission.
//!
//! A single linear pass: validate, record, notify, respond. Validation and
//! storage failures end the request; nothing is retried.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use eventdesk_core::inquiry::validate_submission;
use eventdesk_core::types::InquiryId;

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation shown to the customer after a successful submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Tak for din henvendelse – vi vender tilbage inden for 24 timer.";

/// Query parameters for `POST /api/inquiry`.
#[derive(Debug, Deserialize)]
pub struct InquiryParams {
    /// Overrides the configured notification recipient.
    pub to: Option<String>,
}

/// Success payload for `POST /api/inquiry`.
#[derive(Debug, Serialize)]
pub struct InquiryAccepted {
    pub ok: bool,
    pub id: InquiryId,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// POST /api/inquiry
// ---------------------------------------------------------------------------

/// Accept a booking/contact inquiry.
///
/// The body is taken as untyped JSON so every schema violation can be
/// reported at once, rather than stopping at the first deserialization error.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    query: Result<Query<InquiryParams>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<InquiryAccepted>> {
    let Query(params) = query?;
    let Json(body) = payload?;

    let (inquiry, recipient) = validate_submission(&body, params.to.as_deref())?;

    let id = state.store.insert(&inquiry).await?;

    tracing::info!(
        inquiry_id = %id,
        event_type = inquiry.event_type(),
        package = inquiry.package(),
        "Inquiry recorded",
    );

    state.notifier.notify(&inquiry, recipient);

    Ok(Json(InquiryAccepted {
        ok: true,
        id,
        message: CONFIRMATION_MESSAGE,
    }))
}
