use super::models::NewVet;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct VetValidator;

impl VetValidator {
    pub fn draft(&self, form: &FormData) -> Result<NewVet, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check("name", fields::person_name(form.value("name")));
        let email = result.check("email", fields::email(form.value("email")));
        // Staff lines are local; only clients need the country prefix
        let phone = result.check("phone", fields::numeric_phone(form.value("phone")));

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) => Ok(NewVet {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for VetValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
