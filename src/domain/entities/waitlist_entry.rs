use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One person's registration record, as persisted in the waitlist file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub created_at: DateTime<Utc>,
    pub position: u64,
}

impl WaitlistEntry {
    /// Build the entry that follows `existing` entries in the list.
    pub fn next(existing: usize, email: String, first_name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            created_at: now,
            position: existing as u64 + 1,
        }
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Returns the index of the first entry whose position is not its 1-based rank.
pub fn first_position_gap(entries: &[WaitlistEntry]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .find(|(i, e)| e.position != *i as u64 + 1)
        .map(|(i, _)| i)
}

/// Returns the index of the first entry whose email, ignoring case, already
/// appeared earlier in the list.
pub fn first_duplicate_email(entries: &[WaitlistEntry]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .position(|e| !seen.insert(e.email.to_lowercase()))
}
