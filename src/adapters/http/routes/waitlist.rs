//! Waitlist signup and stats routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::RegistrationRequest,
};

const SUCCESS_MESSAGE: &str = "Successfully joined waitlist!";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterResponse {
    success: bool,
    position: u64,
    total_users: u64,
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats).post(register))
}

/// POST /api/waitlist
/// Validates and stores a signup, returning its waitlist position.
async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let registration = app_state.waitlist_use_cases.register(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(RegisterResponse {
            success: true,
            position: registration.position,
            total_users: registration.total_users,
            message: SUCCESS_MESSAGE,
        }),
    ))
}

/// GET /api/waitlist
/// Total signups plus the most recent ones, oldest first.
async fn stats(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = app_state.waitlist_use_cases.stats().await?;
    Ok(Json(stats))
}
