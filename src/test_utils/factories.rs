//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    application::validators::RegistrationRequest,
    domain::entities::waitlist_entry::WaitlistEntry,
};

const FIRST_NAMES: [&str; 8] = ["Ann", "Bob", "Cal", "Dee", "Eli", "Fay", "Gus", "Hal"];

/// Fixed timestamp for deterministic tests.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap()
}

/// Create a waitlist entry at `position` with sensible defaults.
pub fn create_test_entry(
    position: u64,
    overrides: impl FnOnce(&mut WaitlistEntry),
) -> WaitlistEntry {
    let name = FIRST_NAMES[(position as usize - 1) % FIRST_NAMES.len()];
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        email: format!("user{position}@example.com"),
        first_name: format!("{name}{position}"),
        created_at: test_datetime() + Duration::minutes(position as i64),
        position,
    };
    overrides(&mut entry);
    entry
}

/// Create `count` consecutive entries with positions 1..=count.
pub fn create_test_entries(count: u64) -> Vec<WaitlistEntry> {
    (1..=count).map(|p| create_test_entry(p, |_| {})).collect()
}

/// Build a raw registration payload.
pub fn registration(email: &str, first_name: &str) -> RegistrationRequest {
    RegistrationRequest {
        email: email.to_string(),
        first_name: first_name.to_string(),
    }
}
