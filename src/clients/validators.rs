use super::models::NewClient;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct ClientValidator;

impl ClientValidator {
    /// Checks every field and builds the client when all of them pass
    pub fn draft(&self, form: &FormData) -> Result<NewClient, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check("name", fields::person_name(form.value("name")));
        let phone = result.check("phone", fields::prefixed_phone(form.value("phone")));
        let email = result.check("email", fields::clinic_email(form.value("email")));

        match (name, phone, email) {
            (Some(name), Some(phone), Some(email)) => Ok(NewClient {
                name: name.to_string(),
                phone: phone.to_string(),
                address: form.value("address").to_string(),
                email: email.to_string(),
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for ClientValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
