// src/common/form_data.rs
//! Flat string-keyed form payloads
//!
//! Forms and API calls submit every value as a string, even numeric and date
//! fields. `FormData` normalises JSON request bodies into that shape, and
//! `object_to_form_data` turns a stored record back into it so edit forms can
//! be pre-populated.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds form data from a JSON object, stringifying non-string values
    pub fn from_json(map: Map<String, Value>) -> Self {
        Self(
            map.into_iter()
                .map(|(key, value)| (key, value_to_string(value)))
                .collect(),
        )
    }

    pub fn with(mut self, field: &str, value: impl ToString) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl ToString) {
        self.0.insert(field.to_string(), value.to_string());
    }

    /// Raw submitted value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Trimmed value, empty when the field is missing
    pub fn value(&self, field: &str) -> &str {
        self.get(field).map(str::trim).unwrap_or("")
    }

    /// Trimmed value, `None` when missing or blank
    pub fn non_blank(&self, field: &str) -> Option<&str> {
        Some(self.value(field)).filter(|v| !v.is_empty())
    }

    /// Overlays the non-blank `mutable` fields of `update` onto `self`.
    ///
    /// Returns the merged form and the fields that actually changed hands.
    /// Blank or missing values leave the current value in place.
    pub fn merge_update<'a>(
        &self,
        update: &FormData,
        mutable: &[&'a str],
    ) -> (FormData, Vec<&'a str>) {
        let mut merged = self.clone();
        let mut supplied = Vec::new();

        for field in mutable {
            if let Some(value) = update.non_blank(field) {
                merged.insert(field, value);
                supplied.push(*field);
            }
        }

        (merged, supplied)
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        // 33.0 reads back as "33"
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Converts any serializable record into a flat field -> string mapping.
///
/// Every top-level attribute becomes one entry using its default string form.
pub fn object_to_form_data<T: Serialize>(object: &T) -> Result<FormData, ApiError> {
    let value = serde_json::to_value(object)
        .map_err(|e| ApiError::InternalServer(format!("Failed to serialize record: {}", e)))?;

    match value {
        Value::Object(map) => Ok(FormData::from_json(map)),
        _ => Err(ApiError::BadRequest(
            "Only records with named fields can be converted to form data".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Person {
        name: String,
        age: u32,
        email: String,
        city: String,
    }

    #[test]
    fn test_object_to_form_data() {
        let person = Person {
            name: "John".to_string(),
            age: 30,
            email: "john@example.com".to_string(),
            city: "New York".to_string(),
        };

        let form = object_to_form_data(&person).unwrap();

        assert_eq!(form.get("name"), Some("John"));
        assert_eq!(form.get("age"), Some("30"));
        assert_eq!(form.get("city"), Some("New York"));
        assert_eq!(form.get("email"), Some("john@example.com"));
        assert_eq!(
            form,
            FormData::new()
                .with("name", "John")
                .with("age", 30)
                .with("email", "john@example.com")
                .with("city", "New York")
        );
    }

    #[test]
    fn test_object_to_form_data_rejects_scalars() {
        let result = object_to_form_data(&42);
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_from_json_stringifies_values() {
        let body = json!({
            "phone": 54221555232u64,
            "price": 12.5,
            "whole_price": 33.0,
            "active": true,
            "address": null,
            "tags": ["a"],
        });
        let Value::Object(map) = body else {
            panic!("expected object");
        };

        let form = FormData::from_json(map);
        assert_eq!(form.get("phone"), Some("54221555232"));
        assert_eq!(form.get("price"), Some("12.5"));
        assert_eq!(form.get("whole_price"), Some("33"));
        assert_eq!(form.get("active"), Some("true"));
        assert_eq!(form.get("address"), Some(""));
        assert_eq!(form.get("tags"), Some(r#"["a"]"#));
    }

    #[test]
    fn test_merge_update_keeps_blank_fields() {
        let current = FormData::new()
            .with("name", "Rex")
            .with("breed", "Labrador")
            .with("client_id", "1");
        let update = FormData::new()
            .with("name", "  ")
            .with("breed", "Caniche")
            .with("client_id", "7");

        let (merged, supplied) = current.merge_update(&update, &["name", "breed"]);

        assert_eq!(merged.get("name"), Some("Rex"));
        assert_eq!(merged.get("breed"), Some("Caniche"));
        assert_eq!(merged.get("client_id"), Some("1"));
        assert_eq!(supplied, vec!["breed"]);
    }
}
