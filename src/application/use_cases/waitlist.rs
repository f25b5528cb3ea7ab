use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{RegistrationRequest, validate_registration},
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Whole-list persistence for waitlist entries.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Returns every entry in insertion order, or an empty list when nothing
    /// has been persisted yet.
    async fn load(&self) -> AppResult<Vec<WaitlistEntry>>;
    /// Replaces the persisted list with `entries`.
    async fn save(&self, entries: &[WaitlistEntry]) -> AppResult<()>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub position: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSignup {
    pub first_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    pub total_users: u64,
    pub latest_signups: Vec<RecentSignup>,
}

pub struct WaitlistUseCases {
    store: Arc<dyn WaitlistStore>,
    email: Arc<dyn EmailSender>,
    recent_limit: usize,
    // Serializes load -> append -> save so two registrations never share a snapshot.
    writer: Mutex<()>,
}

impl WaitlistUseCases {
    pub fn new(
        store: Arc<dyn WaitlistStore>,
        email: Arc<dyn EmailSender>,
        recent_limit: usize,
    ) -> Self {
        Self {
            store,
            email,
            recent_limit,
            writer: Mutex::new(()),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn register(&self, request: &RegistrationRequest) -> AppResult<Registration> {
        let valid = validate_registration(request).map_err(AppError::Validation)?;

        let registration = {
            let _guard = self.writer.lock().await;

            let mut entries = self.store.load().await?;

            if let Some(existing) = entries.iter().find(|e| e.matches_email(&valid.email)) {
                return Err(AppError::AlreadyRegistered {
                    position: existing.position,
                });
            }

            let entry = WaitlistEntry::next(
                entries.len(),
                valid.email.clone(),
                valid.first_name.clone(),
                Utc::now(),
            );
            let position = entry.position;
            entries.push(entry);

            self.store.save(&entries).await?;

            Registration {
                position,
                total_users: entries.len() as u64,
            }
        };

        info!(position = registration.position, "Waitlist registration stored");

        self.send_welcome(&valid.email, &valid.first_name, registration.position)
            .await;

        Ok(registration)
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> AppResult<WaitlistStats> {
        let entries = self.store.load().await?;
        let skip = entries.len().saturating_sub(self.recent_limit);
        let latest_signups = entries
            .iter()
            .skip(skip)
            .map(|e| RecentSignup {
                first_name: e.first_name.clone(),
                timestamp: e.created_at,
            })
            .collect();

        Ok(WaitlistStats {
            total_users: entries.len() as u64,
            latest_signups,
        })
    }

    async fn send_welcome(&self, email: &str, first_name: &str, position: u64) {
        let html = welcome_email_html(first_name, position);
        if let Err(err) = self
            .email
            .send(email, "Welcome to the TeeRank waitlist", &html)
            .await
        {
            warn!(error = %err, "Failed to send waitlist welcome email");
        }
    }
}

fn welcome_email_html(first_name: &str, position: u64) -> String {
    format!(
        "<p>Hi {first_name},</p>\
         <p>Thanks for joining the TeeRank waitlist! You are number {position} in line.</p>\
         <p>We will let you know as soon as early access opens.</p>"
    )
}
