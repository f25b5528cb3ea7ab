use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::Utc;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult, use_cases::launch::countdown,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/countdown", get(get_countdown))
}

/// GET /api/launch/countdown
async fn get_countdown(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(countdown(app_state.config.launch_at, Utc::now())))
}
