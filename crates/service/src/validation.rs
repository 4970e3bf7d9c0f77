//! Structural request validation, run at the HTTP boundary before any
//! service call. Each request DTO exposes `validate()` returning every
//! failing field at once rather than stopping at the first.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub(crate) fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", field)));
        return false;
    }
    true
}

pub(crate) fn check_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(
            field,
            format!("{} must be between {} and {} characters", field, min, max),
        ));
    }
}

pub(crate) fn check_max_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
}

pub(crate) fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let plausible = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !plausible {
        errors.push(FieldError::new(field, "invalid email format"));
    }
}
