//! Field-level validators shared by the input schemas.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static URL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn url_re() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").expect("url regex"))
}

/// Required string fields must contain at least one non-whitespace character.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    if !email_re().is_match(value) {
        return Err(AppError::Validation(format!(
            "{} must be a valid email",
            field
        )));
    }
    Ok(())
}

pub fn validate_url(field: &str, value: &str) -> Result<(), AppError> {
    if !url_re().is_match(value) {
        return Err(AppError::Validation(format!(
            "{} must be a valid URL",
            field
        )));
    }
    Ok(())
}

pub fn validate_int_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), AppError> {
    if !allowed.contains(&value) {
        return Err(AppError::Validation(format!(
            "{} must be one of: {:?}",
            field, allowed
        )));
    }
    Ok(())
}

pub fn validate_positive_limit(field: &str, value: i64) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::Validation(format!(
            "{} must be a positive integer",
            field
        )));
    }
    Ok(())
}

pub fn validate_offset(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{} must be non-negative",
            field
        )));
    }
    Ok(())
}
