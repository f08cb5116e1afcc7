use super::models::NewMedicine;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct MedicineValidator;

impl MedicineValidator {
    pub fn draft(&self, form: &FormData) -> Result<NewMedicine, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            fields::required(form.value("name"), "Por favor ingrese un nombre"),
        );
        let description = result.check(
            "description",
            fields::required(form.value("description"), "Por favor ingrese una descripción"),
        );
        let dose = result.check("dose", fields::dose(form.value("dose")));

        match (name, description, dose) {
            (Some(name), Some(description), Some(dose)) => Ok(NewMedicine {
                name: name.to_string(),
                description: description.to_string(),
                dose,
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for MedicineValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
