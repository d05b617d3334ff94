use std::sync::Arc;

use eventdesk_core::store::InquiryStore;

use crate::config::ServerConfig;
use crate::notifications::Notifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where inquiries are recorded. Constructed once at startup.
    pub store: Arc<dyn InquiryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Staff notifier, with recipients resolved at startup.
    pub notifier: Arc<Notifier>,
}
