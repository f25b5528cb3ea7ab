use serde::Deserialize;
use validator::ValidateEmail;

use crate::app_error::FieldError;

pub const MAX_FIRST_NAME_LEN: usize = 50;

/// Raw registration payload as submitted by the landing page form.
/// Missing fields deserialize as empty strings so they fail validation
/// instead of the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
}

/// A registration that passed validation, with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: String,
    pub first_name: String,
}

/// Validates that the input looks like a valid email address.
/// On top of the RFC shape check the domain must be dotted with a non-empty
/// TLD, and consecutive dots are rejected anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || !email.validate_email() || email.contains("..") {
        return false;
    }

    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates a registration and normalizes it.
/// Every failing field is reported, not just the first one.
pub fn validate_registration(
    request: &RegistrationRequest,
) -> Result<ValidRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = request.email.trim();
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }

    let first_name = request.first_name.trim();
    if first_name.is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    } else if first_name.chars().count() > MAX_FIRST_NAME_LEN {
        errors.push(FieldError::new("firstName", "First name too long"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidRegistration {
        email: email.to_lowercase(),
        first_name: first_name.to_string(),
    })
}
