// Common validation types and traits

use std::collections::BTreeMap;

/// Error messages keyed by the form field (or error key) they belong to
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug)]
pub struct ValidationError {
    /// Key the error is reported under
    pub field: String,
    /// Form field that produced the error; differs from `field` for keyed errors
    /// such as `invalid_birthday`
    pub source: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.add_keyed_error(field, field, message);
    }

    pub fn add_keyed_error(&mut self, source: &str, key: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: key.to_string(),
            source: source.to_string(),
            message: message.to_string(),
        });
    }

    /// Records the outcome of a single field check
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, &str>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.add_error(field, message);
                None
            }
        }
    }

    /// Narrows the errors to those raised by `fields`.
    ///
    /// When none of `fields` is at fault the result is returned untouched, so
    /// an invalid result never turns valid.
    pub fn focus_on(mut self, fields: &[&str]) -> Self {
        let raised_by = |e: &ValidationError| fields.iter().any(|f| *f == e.source);
        if self.errors.iter().any(raised_by) {
            self.errors.retain(raised_by);
        }
        self
    }

    /// Field-keyed view of the errors; the first error reported for a key wins
    pub fn field_errors(&self) -> FieldErrors {
        let mut map = FieldErrors::new();
        for error in &self.errors {
            map.entry(error.field.clone())
                .or_insert_with(|| error.message.clone());
        }
        map
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_wins() {
        let mut result = ValidationResult::new();
        result.add_error("phone", "first");
        result.add_error("phone", "second");
        result.add_error("name", "bad name");

        let errors = result.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["phone"], "first");
        assert_eq!(errors["name"], "bad name");
    }

    #[test]
    fn test_focus_on_uses_source_field() {
        let mut result = ValidationResult::new();
        result.add_keyed_error("birthday", "invalid_birthday", "too late");
        result.add_error("name", "bad name");

        let focused = result.focus_on(&["birthday"]);
        assert!(!focused.is_valid);
        let errors = focused.field_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("invalid_birthday"));
    }

    #[test]
    fn test_focus_on_unrelated_fields_keeps_everything() {
        let mut result = ValidationResult::new();
        result.add_error("name", "bad name");

        let focused = result.focus_on(&["phone"]);
        assert!(!focused.is_valid);
        assert_eq!(focused.errors.len(), 1);
    }
}
