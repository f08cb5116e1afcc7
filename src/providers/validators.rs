use super::models::NewProvider;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct ProviderValidator;

impl ProviderValidator {
    pub fn draft(&self, form: &FormData) -> Result<NewProvider, ValidationResult> {
        let mut result = ValidationResult::new();

        // Company names may carry digits and suffixes ("SA", "SRL")
        let name = result.check(
            "name",
            fields::required(form.value("name"), "Por favor ingrese un nombre"),
        );
        let email = result.check("email", fields::email(form.value("email")));
        let address = result.check(
            "address",
            fields::required(form.value("address"), "Por favor ingrese una dirección"),
        );

        match (name, email, address) {
            (Some(name), Some(email), Some(address)) => Ok(NewProvider {
                name: name.to_string(),
                email: email.to_string(),
                address: address.to_string(),
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for ProviderValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
