//! Staff notification for new inquiries.
//!
//! There is no mail transport yet: the [`Notifier`] renders the summary and
//! emits it as a structured log event, which is what operators watch. It
//! cannot fail, and it runs after the inquiry is stored.

use eventdesk_core::inquiry::{validate_recipient, Inquiry};
use eventdesk_core::notification::InquirySummary;

use crate::config::optional_env;

// ---------------------------------------------------------------------------
// NotifierConfig
// ---------------------------------------------------------------------------

/// Configured notification recipients, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct NotifierConfig {
    /// Primary booking inbox (`BOOKING_EMAIL`).
    pub booking_address: Option<String>,
    /// Generic fallback inbox (`EMAIL_TO`).
    pub fallback_address: Option<String>,
}

impl NotifierConfig {
    /// Load recipients from `BOOKING_EMAIL` and `EMAIL_TO`.
    ///
    /// Blank values count as unset. Addresses that do not look like email
    /// addresses are kept but logged, since the log channel does not need a
    /// deliverable address.
    pub fn from_env() -> Self {
        let config = Self {
            booking_address: optional_env("BOOKING_EMAIL"),
            fallback_address: optional_env("EMAIL_TO"),
        };

        for (var, address) in [
            ("BOOKING_EMAIL", &config.booking_address),
            ("EMAIL_TO", &config.fallback_address),
        ] {
            if let Some(address) = address {
                if validate_recipient(address).is_err() {
                    tracing::warn!(var, address = %address, "Configured recipient is not a valid email address");
                }
            }
        }

        config
    }

    /// Pick the recipient: explicit request parameter, then the booking
    /// address, then the fallback address.
    pub fn resolve_recipient<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit
            .or(self.booking_address.as_deref())
            .or(self.fallback_address.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Announces new inquiries to staff.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    config: NotifierConfig,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    /// Emit the notification for a stored inquiry.
    ///
    /// Without any resolvable recipient the body is still logged, so the
    /// submission stays visible to operators.
    pub fn notify(&self, inquiry: &Inquiry, explicit_to: Option<&str>) {
        let summary = InquirySummary::for_inquiry(inquiry);

        match self.config.resolve_recipient(explicit_to) {
            Some(to) => tracing::info!(
                to,
                subject = summary.subject,
                body = %summary.body,
                "Inquiry notification",
            ),
            None => tracing::info!(
                subject = summary.subject,
                body = %summary.body,
                "Inquiry received with no recipient configured; set BOOKING_EMAIL to forward",
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
