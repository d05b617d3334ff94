use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventdesk_api::config::ServerConfig;
use eventdesk_api::notifications::Notifier;
use eventdesk_api::router::build_app_router;
use eventdesk_api::state::AppState;
use eventdesk_db::PgInquiryStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdesk_api=debug,eventdesk_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        booking_address = ?config.notifier.booking_address,
        fallback_address = ?config.notifier.fallback_address,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = eventdesk_db::create_pool(
        &config.database.url,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .expect("DATABASE_URL is not a valid PostgreSQL URL");
    tracing::info!("Database connection pool created");

    // The pool connects lazily; an unreachable database leaves the server up
    // so `/test` can report it, and inquiries fail with a storage error.
    match eventdesk_db::health_check(&pool).await {
        Ok(()) => {
            tracing::info!("Database health check passed");
            eventdesk_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable at startup, migrations skipped");
        }
    }

    let store = Arc::new(PgInquiryStore::new(pool));

    // --- App state ---
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
        notifier: Arc::new(Notifier::new(config.notifier.clone())),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    store.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
