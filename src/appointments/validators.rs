use super::models::NewAppointment;
use crate::common::{fields, FormData, ValidationResult, Validator};

#[derive(Debug, Default)]
pub struct AppointmentValidator;

impl AppointmentValidator {
    pub fn draft(&self, form: &FormData) -> Result<NewAppointment, ValidationResult> {
        let mut result = ValidationResult::new();

        let date = result.check(
            "date",
            fields::required(form.value("date"), "Por favor ingrese una fecha").and_then(fields::date),
        );
        let time = result.check(
            "time",
            fields::required(form.value("time"), "Por favor ingrese un horario").and_then(fields::time),
        );
        let pet_id = result.check(
            "pet",
            fields::record_id(form.value("pet"), "Por favor seleccione una mascota"),
        );
        let vet_id = result.check(
            "vet",
            fields::record_id(form.value("vet"), "Por favor seleccione un veterinario"),
        );

        match (date, time, pet_id, vet_id) {
            (Some(date), Some(time), Some(pet_id), Some(vet_id)) => Ok(NewAppointment {
                date,
                time,
                pet_id,
                vet_id,
            }),
            _ => Err(result),
        }
    }
}

impl Validator<FormData> for AppointmentValidator {
    fn validate(&self, data: &FormData) -> ValidationResult {
        self.draft(data).err().unwrap_or_default()
    }
}
