use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Total score above which a job is surfaced as a "high match".
    /// Threshold policy lives here, not in the scorer.
    pub match_notify_threshold: f64,
    /// Monthly-to-hourly salary conversion baseline.
    pub work_days_per_month: f64,
    pub work_hours_per_day: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_notify_threshold: env_f64("MATCH_NOTIFY_THRESHOLD", 0.7)?,
            work_days_per_month: env_f64("WORK_DAYS_PER_MONTH", 22.0)?,
            work_hours_per_day: env_f64("WORK_HOURS_PER_DAY", 8.0)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<f64>()
            .with_context(|| format!("'{key}' must be a number")),
        Err(_) => Ok(default),
    }
}
