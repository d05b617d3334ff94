//! The storage seam the inquiry recorder is written against.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::inquiry::Inquiry;
use crate::types::InquiryId;

/// How many collection names a health probe reports at most.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Result of probing the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Connected and able to enumerate collections.
    Healthy {
        database: String,
        collections: Vec<String>,
    },
    /// Connected, but enumerating collections failed.
    Degraded { database: String, error: String },
    /// No connection could be made.
    Unavailable { error: String },
}

impl HealthStatus {
    pub fn is_connected(&self) -> bool {
        !matches!(self, HealthStatus::Unavailable { .. })
    }
}

/// Durable home of submitted inquiries.
///
/// Implementations are shared across concurrent requests and must support
/// independent simultaneous inserts.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Insert one inquiry and return the identifier the store generated for it.
    ///
    /// A single atomic write: on error no record exists. There is no
    /// duplicate check, so identical inquiries get distinct identifiers.
    async fn insert(&self, inquiry: &Inquiry) -> Result<InquiryId, StorageError>;

    /// Probe connectivity without writing anything.
    async fn ping(&self) -> HealthStatus;
}
