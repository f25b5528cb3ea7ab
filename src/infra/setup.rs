use crate::{
    adapters::{
        email::LogEmailSender, http::app_state::AppState, persistence::JsonFileWaitlistStore,
    },
    infra::{InMemoryRateLimiter, InfraError, RateLimiterTrait, config::AppConfig},
    use_cases::waitlist::{EmailSender, WaitlistStore, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let store = Arc::new(JsonFileWaitlistStore::new(config.waitlist_path.clone()));
    let email = Arc::new(LogEmailSender::new(config.email_from.clone()));

    let waitlist_use_cases = WaitlistUseCases::new(
        store as Arc<dyn WaitlistStore>,
        email as Arc<dyn EmailSender>,
        config.recent_signups_limit,
    );

    let rate_limiter = Arc::new(InMemoryRateLimiter::new(
        config.rate_limit_window_secs,
        config.rate_limit_per_ip,
    )?);

    tracing::info!(
        waitlist_file = %config.waitlist_path.display(),
        launch_at = %config.launch_at,
        "Application state initialized"
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        rate_limiter: rate_limiter as Arc<dyn RateLimiterTrait>,
    })
}

pub fn init_tracing(config: &AppConfig) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "teerank_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when configured
    let json_layer = match &config.log_json_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
