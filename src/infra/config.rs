use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use env_helpers::get_env_default;

use super::InfraError;

pub const DEFAULT_LAUNCH_AT: &str = "2025-03-01T00:00:00Z";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// JSON file holding the waitlist. Its directory is created on first save.
    pub waitlist_path: PathBuf,
    /// How many recent signups the stats endpoint lists.
    pub recent_signups_limit: usize,
    pub launch_at: DateTime<Utc>,
    pub email_from: String,
    pub rate_limit_window_secs: u64,
    pub rate_limit_per_ip: u64,
    /// Whether to trust X-Forwarded-For headers. Set to true when behind a reverse proxy.
    pub trust_proxy: bool,
    /// Optional JSON log file, in addition to console output.
    pub log_json_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));

        let cors_origin: HeaderValue = get_env_default(
            "CORS_ORIGIN",
            String::from("http://localhost:3000"),
        )
        .parse::<HeaderValue>()
        .map_err(|e| InfraError::ConfigInvalid {
            var: "CORS_ORIGIN",
            reason: e.to_string(),
        })?;

        let waitlist_path =
            PathBuf::from(get_env_default("WAITLIST_FILE", "data/waitlist.json".to_string()));
        let recent_signups_limit: usize = get_env_default("RECENT_SIGNUPS_LIMIT", 5);

        let launch_at = parse_launch_at(&get_env_default(
            "LAUNCH_AT",
            DEFAULT_LAUNCH_AT.to_string(),
        ))?;

        let email_from: String =
            get_env_default("EMAIL_FROM", "TeeRank <hello@teerank.app>".to_string());
        let rate_limit_window_secs: u64 = get_env_default("RATE_LIMIT_WINDOW_SECS", 60);
        let rate_limit_per_ip: u64 = get_env_default("RATE_LIMIT_PER_IP", 10);
        // Default to false - must explicitly enable when behind a trusted proxy
        let trust_proxy: bool = get_env_default("TRUST_PROXY", false);
        let log_json_file: Option<PathBuf> = std::env::var("LOG_JSON_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            cors_origin,
            waitlist_path,
            recent_signups_limit,
            launch_at,
            email_from,
            rate_limit_window_secs,
            rate_limit_per_ip,
            trust_proxy,
            log_json_file,
        })
    }
}

fn parse_launch_at(raw: &str) -> Result<DateTime<Utc>, InfraError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| InfraError::ConfigInvalid {
            var: "LAUNCH_AT",
            reason: e.to_string(),
        })
}
