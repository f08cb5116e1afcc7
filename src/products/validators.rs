use super::models::NewProduct;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct ProductValidator;

impl ProductValidator {
    pub fn draft(&self, form: &FormData) -> Result<NewProduct, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            fields::required(form.value("name"), "Por favor ingrese un nombre"),
        );
        let product_type = result.check(
            "type",
            fields::required(form.value("type"), "Por favor ingrese un tipo"),
        );
        let price = result.check("price", fields::price(form.value("price")));

        match (name, product_type, price) {
            (Some(name), Some(product_type), Some(price)) => Ok(NewProduct {
                name: name.to_string(),
                product_type: product_type.to_string(),
                price,
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for ProductValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
