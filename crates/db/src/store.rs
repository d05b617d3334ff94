use async_trait::async_trait;

use eventdesk_core::error::StorageError;
use eventdesk_core::inquiry::Inquiry;
use eventdesk_core::store::{HealthStatus, InquiryStore, MAX_LISTED_COLLECTIONS};
use eventdesk_core::types::InquiryId;

use crate::repositories::{CatalogRepo, InquiryRepo};
use crate::DbPool;

/// [`InquiryStore`] backed by the `inquiries` table.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgInquiryStore {
    pool: DbPool,
}

impl PgInquiryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl InquiryStore for PgInquiryStore {
    async fn insert(&self, inquiry: &Inquiry) -> Result<InquiryId, StorageError> {
        let id = InquiryRepo::create(&self.pool, inquiry)
            .await
            .map_err(storage_error)?;
        tracing::debug!(inquiry_id = %id, "Inquiry row inserted");
        Ok(InquiryId::from(id))
    }

    async fn ping(&self) -> HealthStatus {
        let database = match CatalogRepo::database_name(&self.pool).await {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(error = %err, "Database ping failed");
                return HealthStatus::Unavailable {
                    error: err.to_string(),
                };
            }
        };

        match CatalogRepo::list_tables(&self.pool, MAX_LISTED_COLLECTIONS).await {
            Ok(collections) => HealthStatus::Healthy {
                database,
                collections,
            },
            Err(err) => {
                tracing::warn!(error = %err, "Listing tables failed");
                HealthStatus::Degraded {
                    database,
                    error: err.to_string(),
                }
            }
        }
    }
}

/// Classify a sqlx error. The classification only feeds logs; clients see
/// every storage failure the same way.
fn storage_error(err: sqlx::Error) -> StorageError {
    let detail = err.to_string();
    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(detail),
        sqlx::Error::Database(_) => StorageError::Rejected(detail),
        _ => StorageError::Unavailable(detail),
    }
}
