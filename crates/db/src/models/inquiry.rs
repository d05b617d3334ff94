//! Row model for the `inquiries` table.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use eventdesk_core::types::Timestamp;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InquiryRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub date_preference: Option<String>,
    pub guests: Option<i32>,
    pub package: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
}
