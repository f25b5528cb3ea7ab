use serde::Serialize;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid form data")]
    Validation(Vec<FieldError>),

    #[error("Email already registered")]
    AlreadyRegistered { position: u64 },

    #[error("Waitlist store read failed: {0}")]
    StoreRead(String),

    #[error("Waitlist store write failed: {0}")]
    StoreWrite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Too many requests. Please slow down.")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    ValidationFailed,
    AlreadyRegistered,
    StoreUnavailable,
    InvalidInput,
    RateLimited,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
