//! Staff-facing summary of a new inquiry.
//!
//! Rendered in Danish, since the summary goes to the booking team.

use crate::inquiry::Inquiry;

/// Subject line used for every inquiry notification.
pub const SUBJECT: &str = "Ny booking-henvendelse";

/// Placeholder for optional values the customer left blank.
const BLANK: &str = "-";

/// A rendered notification, independent of the channel that delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySummary {
    pub subject: &'static str,
    pub body: String,
}

impl InquirySummary {
    pub fn for_inquiry(inquiry: &Inquiry) -> Self {
        let guests = inquiry
            .guests()
            .map(|g| g.to_string())
            .unwrap_or_else(|| BLANK.to_string());

        let body = format!(
            "Navn: {}\n\
             Email: {}\n\
             Telefon: {}\n\
             Eventtype: {}\n\
             Dato/periode: {}\n\
             Antal gæster: {}\n\
             Pakke: {}\n\
             \n\
             Besked:\n{}\n",
            inquiry.name(),
            inquiry.email(),
            inquiry.phone(),
            inquiry.event_type(),
            inquiry.date_preference().unwrap_or(BLANK),
            guests,
            inquiry.package(),
            inquiry.message().unwrap_or(BLANK),
        );

        Self {
            subject: SUBJECT,
            body,
        }
    }
}
