//! Input validation for lead submissions

pub mod rules;

pub use rules::*;

use serde::Serialize;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Field-level outcome of validating a submission.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        let mut result = Self::success();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Validation failed for field '{}' ({})", field, error.code),
                };
                result.add_error(field, &message);
            }
        }

        result
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }
}

pub trait Validatable {
    fn validate_comprehensive(&self) -> ValidationResult;
}

impl<T> Validatable for T
where
    T: Validate,
{
    fn validate_comprehensive(&self) -> ValidationResult {
        match self.validate() {
            Ok(_) => ValidationResult::success(),
            Err(errors) => ValidationResult::from_validation_errors(errors),
        }
    }
}

/// Canonicalises raw input before it is validated.
pub trait Normalize {
    fn normalize(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Enquiry {
        #[validate(custom(function = "validate_required", message = "Name is required"))]
        name: String,
        #[validate(custom(function = "validate_email", message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_collects_every_failing_field() {
        let enquiry = Enquiry {
            name: "".to_string(),
            email: "nope".to_string(),
        };
        let result = enquiry.validate_comprehensive();

        assert!(!result.is_valid);
        assert_eq!(result.field_names(), vec!["email", "name"]);
        assert_eq!(result.errors["name"], vec!["Name is required".to_string()]);
    }
}
