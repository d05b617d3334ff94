use std::str::FromStr;

use crate::notifications::NotifierConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Notification recipients.
    pub notifier: NotifierConfig,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Informational database name, reported by the `/test` probe.
    pub name: Option<String>,
    /// Seconds a query waits for a pooled connection (default: `5`).
    pub acquire_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default    |
    /// |---------------------------|------------|
    /// | `HOST`                    | `0.0.0.0`  |
    /// | `PORT`                    | `8000`     |
    /// | `CORS_ORIGINS`            | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`       |
    /// | `DATABASE_URL`            | (required) |
    /// | `DATABASE_NAME`           | unset      |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`        |
    /// | `BOOKING_EMAIL`           | unset      |
    /// | `EMAIL_TO`                | unset      |
    ///
    /// Panics on missing `DATABASE_URL` or unparseable numbers; misconfiguration
    /// should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = parse_env("PORT", 8000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", 30);

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            name: optional_env("DATABASE_NAME"),
            acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
            notifier: NotifierConfig::from_env(),
        }
    }
}

/// Read `key`, treating unset and blank values the same.
pub(crate) fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e}")),
        None => default,
    }
}
