use crate::constants::{EMAIL_LOCAL_PART_MAX_LENGTH, EMAIL_MAX_LENGTH};
use crate::core::errors::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%\&'*+/=?^_`{|}\~\-]+(?:\.[a-zA-Z0-9!#$%\&'*+/=?^_`{|}\~\-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A single rule attached to a form field.
///
/// Only `Required` rejects an empty value; the other rules treat an empty
/// value as "nothing to check" so a blank field reports one error, not several.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validator {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

impl Validator {
    pub fn check(&self, field: &str, value: &str) -> Option<FieldError> {
        match *self {
            Validator::Required if value.is_empty() => Some(FieldError::new(
                field,
                format!("Missing {}", field),
                format!("{} is required", field),
            )),
            Validator::Email if !value.is_empty() && !is_valid_email(value) => Some(FieldError::new(
                field,
                format!("Invalid {}", field),
                format!("{} is not a valid email address", value),
            )),
            Validator::MinLength(min) if !value.is_empty() && value.chars().count() < min => {
                Some(FieldError::new(
                    field,
                    format!("{} Too Short", field),
                    format!("{} must be at least {} characters", field, min),
                ))
            }
            Validator::MaxLength(max) if value.chars().count() > max => Some(FieldError::new(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max),
            )),
            _ => None,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    match value.find('@') {
        Some(at) if at <= EMAIL_LOCAL_PART_MAX_LENGTH => EMAIL_SHAPE.is_match(value),
        _ => false,
    }
}

/// Runs every validator against `value` and collects the failures in order.
pub fn run_validators(field: &str, value: &str, validators: &[Validator]) -> Vec<FieldError> {
    validators
        .iter()
        .filter_map(|v| v.check(field, value))
        .collect()
}
