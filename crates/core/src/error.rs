use std::fmt;

/// Domain-level failure of an inquiry submission.
///
/// Notification problems are deliberately absent: they are swallowed by the
/// notifier and never reach a caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Where in the request a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Query => "query",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    Empty,
    InvalidEmail,
    WrongType,
    OutOfRange,
    NotAnObject,
}

impl FieldErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::Empty => "empty",
            FieldErrorKind::InvalidEmail => "invalid_email",
            FieldErrorKind::WrongType => "wrong_type",
            FieldErrorKind::OutOfRange => "out_of_range",
            FieldErrorKind::NotAnObject => "not_an_object",
        }
    }
}

/// A rejected field, with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub location: Location,
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(
        location: Location,
        field: impl Into<String>,
        kind: FieldErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location,
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Every field of a submission that failed the inquiry schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "{} invalid field(s): {}", fields.len(), fields.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// The persistence write (or probe) failed.
///
/// The variants only classify the cause for logging; every variant is
/// reported to clients the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage timed out: {0}")]
    Timeout(String),

    #[error("write rejected: {0}")]
    Rejected(String),
}

impl StorageError {
    /// The underlying driver message, without the classification prefix.
    pub fn detail(&self) -> &str {
        match self {
            StorageError::Unavailable(msg)
            | StorageError::Timeout(msg)
            | StorageError::Rejected(msg) => msg,
        }
    }
}
