use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the storage layer when an inquiry is inserted.
///
/// Callers must not assume any ordering or structure; it is only ever
/// compared for equality and echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(String);

impl InquiryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<uuid::Uuid> for InquiryId {
    fn from(id: uuid::Uuid) -> Self {
        Self(id.to_string())
    }
}

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
