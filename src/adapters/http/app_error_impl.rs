use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client-caused outcomes are routine; only infrastructure failures are errors.
        match &self {
            AppError::StoreRead(_) | AppError::StoreWrite(_) | AppError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed");
            }
            _ => tracing::info!(error = %self, "Request rejected"),
        }

        match self {
            AppError::Validation(details) => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationFailed,
                "Invalid form data",
                Some(("details", json!(details))),
            ),
            AppError::AlreadyRegistered { position } => error_resp(
                StatusCode::CONFLICT,
                ErrorCode::AlreadyRegistered,
                "Email already registered",
                Some(("position", json!(position))),
            ),
            AppError::StoreRead(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StoreUnavailable,
                "Failed to read waitlist. Please try again later.",
                None,
            ),
            AppError::StoreWrite(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StoreUnavailable,
                "Failed to join waitlist. Please try again later.",
                None,
            ),
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, &msg, None)
            }
            AppError::RateLimited => error_resp(
                StatusCode::TOO_MANY_REQUESTS,
                ErrorCode::RateLimited,
                "Too many requests. Please try again later.",
                None,
            ),
            AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Internal server error",
                None,
            ),
        }
    }
}

fn error_resp(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
    extra: Option<(&str, Value)>,
) -> Response {
    let mut body = json!({ "error": message, "code": code.as_str() });
    if let Some((key, value)) = extra {
        body[key] = value;
    }
    (status, Json(body)).into_response()
}
