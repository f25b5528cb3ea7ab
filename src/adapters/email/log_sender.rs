use async_trait::async_trait;

use crate::{app_error::AppResult, use_cases::waitlist::EmailSender};

/// Stand-in for a real mail provider: records every message in the log
/// instead of delivering it.
#[derive(Clone)]
pub struct LogEmailSender {
    from: String,
}

impl LogEmailSender {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        tracing::info!(
            from = %self.from,
            to = %to,
            subject = %subject,
            body_len = html.len(),
            "Email delivery stubbed, message logged only"
        );
        Ok(())
    }
}
