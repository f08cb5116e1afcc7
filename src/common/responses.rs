// Response bodies shared by the entity handlers

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{FieldErrors, FormData, Validator};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Outcome of checking a form without saving it; `errors` is empty when valid
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResponse {
    pub fn from_form<V: Validator<FormData>>(validator: &V, form: &FormData) -> Self {
        let result = validator.validate(form);
        Self {
            valid: result.is_valid,
            errors: result.field_errors(),
        }
    }
}

/// POST /api/validate/<entities> - Field-level checks only; nothing is stored
pub async fn validate_form<V>(Json(payload): Json<Map<String, Value>>) -> Json<ValidationResponse>
where
    V: Validator<FormData> + Default,
{
    let form = FormData::from_json(payload);
    Json(ValidationResponse::from_form(&V::default(), &form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::validators::ProductValidator;
    use serde_json::json;

    fn product(price: &str) -> Map<String, Value> {
        match json!({"name": "Pelota", "type": "Juguete", "price": price}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = FormData::from_json(product("33"));

        let response = ValidationResponse::from_form(&ProductValidator, &form);

        assert!(response.valid);
        assert!(response.errors.is_empty());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"valid": true, "errors": {}})
        );
    }

    #[tokio::test]
    async fn test_validate_form_reports_field_errors() {
        let Json(response) = validate_form::<ProductValidator>(Json(product("-1"))).await;

        assert!(!response.valid);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "valid": false,
                "errors": {"price": "Por favor ingrese un precio mayor a 0."}
            })
        );
    }
}
