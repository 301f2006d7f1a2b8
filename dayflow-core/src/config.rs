//! Runtime configuration

use chrono_tz::Tz;

/// Core configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DAYFLOW_DB_PATH | ./dayflow.db | SQLite database file |
/// | DAYFLOW_TIMEZONE | UTC | Business timezone (IANA name) |
/// | DAYFLOW_LOG_LEVEL | info | Log level (trace..error) |
/// | DAYFLOW_LOG_DIR | (unset) | Daily-rolling log directory |
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file
    pub db_path: String,
    /// Business timezone; "today" and default slip periods resolve here
    pub timezone: Tz,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for daily-rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. An unparseable timezone falls back to
    /// UTC with a warning rather than refusing to start.
    pub fn from_env() -> Self {
        let timezone = std::env::var("DAYFLOW_TIMEZONE")
            .ok()
            .and_then(|name| match name.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!("Unknown timezone '{}', falling back to UTC", name);
                    None
                }
            })
            .unwrap_or(Tz::UTC);

        Self {
            db_path: std::env::var("DAYFLOW_DB_PATH").unwrap_or_else(|_| "./dayflow.db".into()),
            timezone,
            log_level: std::env::var("DAYFLOW_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("DAYFLOW_LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./dayflow.db".into(),
            timezone: Tz::UTC,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
