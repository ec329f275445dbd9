//! Validation rules and custom validators

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

pub const MAX_EMAIL_LENGTH: usize = 254;

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required"));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::new("email_too_long"));
    }

    if !EMAIL_REGEX.is_match(email) || email.contains("..") {
        return Err(ValidationError::new("email"));
    }

    Ok(())
}

/// Mandatory text must contain something other than whitespace.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Values that end up in an email subject line.
pub fn validate_single_line(value: &str) -> Result<(), ValidationError> {
    if value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::new("single_line"));
    }
    Ok(())
}

pub fn normalize_text(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trims and lower-cases the domain. The local part is left as entered,
/// since mailbox names may be case-sensitive.
pub fn normalize_email(value: &mut String) {
    let trimmed = value.trim();
    *value = match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    };
}

pub fn normalize_optional(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        normalize_text(inner);
    }
}
