//! Domain layer for the EventDesk inquiry backend.
//!
//! Holds the validated [`inquiry::Inquiry`] type and its validator, the
//! error taxonomy shared by the storage and HTTP layers, the
//! [`store::InquiryStore`] seam the recorder is written against, and the
//! staff notification summary. Nothing in this crate performs I/O.

pub mod error;
pub mod inquiry;
pub mod notification;
pub mod store;
pub mod text;
pub mod types;
