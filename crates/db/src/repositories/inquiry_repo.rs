//! Repository for the `inquiries` table.

use sqlx::PgPool;
use uuid::Uuid;

use eventdesk_core::inquiry::Inquiry;

use crate::models::inquiry::InquiryRow;

/// Column list for `inquiries` queries.
const COLUMNS: &str = "\
    id, name, email, phone, event_type, date_preference, \
    guests, package, message, created_at";

/// Insert and lookup for inquiries. Rows are never updated or deleted.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a validated inquiry, returning the generated id.
    pub async fn create(pool: &PgPool, input: &Inquiry) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO inquiries \
                (name, email, phone, event_type, date_preference, guests, package, message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(input.name())
        .bind(input.email())
        .bind(input.phone())
        .bind(input.event_type())
        .bind(input.date_preference())
        .bind(input.guests())
        .bind(input.package())
        .bind(input.message())
        .fetch_one(pool)
        .await
    }

    /// Find an inquiry by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<InquiryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, InquiryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored inquiries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries")
            .fetch_one(pool)
            .await
    }
}
