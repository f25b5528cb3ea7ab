//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::{InMemoryRateLimiter, RateLimiterTrait, config::AppConfig},
    test_utils::{CapturingEmailSender, InMemoryWaitlistStore},
    use_cases::waitlist::WaitlistUseCases,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, store, email) = TestAppStateBuilder::new()
///     .with_entries(create_test_entries(3))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    launch_at: DateTime<Utc>,
    rate_limit_per_ip: u64,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            launch_at: Utc::now() + chrono::Duration::days(30),
            rate_limit_per_ip: 1_000,
        }
    }

    /// Seed the store with existing entries.
    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_launch_at(mut self, launch_at: DateTime<Utc>) -> Self {
        self.launch_at = launch_at;
        self
    }

    /// Allowed submissions per client within the (60s) window.
    pub fn with_rate_limit(mut self, per_ip: u64) -> Self {
        self.rate_limit_per_ip = per_ip;
        self
    }

    /// Build the state, returning the mocks for assertions.
    pub fn build(self) -> (AppState, Arc<InMemoryWaitlistStore>, Arc<CapturingEmailSender>) {
        let store = Arc::new(InMemoryWaitlistStore::with_entries(self.entries));
        let email = Arc::new(CapturingEmailSender::new());

        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            waitlist_path: PathBuf::from("unused-in-tests.json"),
            recent_signups_limit: 5,
            launch_at: self.launch_at,
            email_from: "test@teerank.test".to_string(),
            rate_limit_window_secs: 60,
            rate_limit_per_ip: self.rate_limit_per_ip,
            trust_proxy: false,
            log_json_file: None,
        };

        let waitlist_use_cases = WaitlistUseCases::new(
            store.clone(),
            email.clone(),
            config.recent_signups_limit,
        );

        let limiter =
            InMemoryRateLimiter::new(config.rate_limit_window_secs, config.rate_limit_per_ip)
                .expect("test rate limit config is valid");
        let rate_limiter: Arc<dyn RateLimiterTrait> = Arc::new(limiter);

        let app_state = AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
            rate_limiter,
        };

        (app_state, store, email)
    }
}
