//! EventDesk API server library.
//!
//! Exposes config, state, error handling, the notifier, and the router
//! builder so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod notifications;
pub mod router;
pub mod routes;
pub mod state;
