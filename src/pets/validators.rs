use super::models::NewPet;
use crate::common::{fields, FormData, ValidationResult, Validator};
use chrono::{Local, NaiveDate};

/// Validates pet forms against a fixed "today"
#[derive(Debug)]
pub struct PetValidator {
    pub today: NaiveDate,
}

impl PetValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn draft(&self, form: &FormData) -> Result<NewPet, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            fields::required(form.value("name"), "Por favor ingrese un nombre"),
        );
        let breed = result.check(
            "breed",
            fields::required(form.value("breed"), "Por favor ingrese una raza"),
        );
        let birthday = self.check_birthday(form.value("birthday"), &mut result);
        let client_id = result.check(
            "client",
            fields::record_id(form.value("client"), "Por favor seleccione un cliente"),
        );

        match (name, breed, birthday, client_id) {
            (Some(name), Some(breed), Some(birthday), Some(client_id)) => Ok(NewPet {
                name: name.to_string(),
                breed: breed.to_string(),
                birthday,
                client_id,
            }),
            _ => Err(result),
        }
    }

    fn check_birthday(&self, value: &str, result: &mut ValidationResult) -> Option<NaiveDate> {
        let date = result.check(
            "birthday",
            fields::required(value, "Por favor ingrese una fecha de nacimiento")
                .and_then(fields::date),
        )?;

        match fields::past_date(date, self.today) {
            Ok(date) => Some(date),
            Err(message) => {
                result.add_keyed_error("birthday", "invalid_birthday", message);
                None
            }
        }
    }
}

impl Default for PetValidator {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl Validator<FormData> for PetValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
