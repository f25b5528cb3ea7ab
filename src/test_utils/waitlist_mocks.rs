//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{EmailSender, WaitlistStore},
};

/// In-memory implementation of WaitlistStore for testing.
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    fail_load: AtomicBool,
    fail_save: AtomicBool,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Make every subsequent load fail with a read error.
    pub fn fail_loads(&self) {
        self.fail_load.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent save fail with a write error.
    pub fn fail_saves(&self) {
        self.fail_save.store(true, Ordering::SeqCst);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn load(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(AppError::StoreRead("simulated read failure".into()));
        }
        // Yield so concurrent callers interleave between load and save.
        tokio::task::yield_now().await;
        Ok(self.get_all())
    }

    async fn save(&self, entries: &[WaitlistEntry]) -> AppResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(AppError::StoreWrite("simulated write failure".into()));
        }
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that records messages instead of sending them.
#[derive(Default)]
pub struct CapturingEmailSender {
    emails: Mutex<Vec<CapturedEmail>>,
    fail: bool,
}

impl CapturingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every send fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn captured_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for CapturingEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Internal("simulated email failure".into()));
        }
        self.emails.lock().unwrap().push(CapturedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
