use super::models::{Appointment, NewAppointment, APPOINTMENT_MUTABLE_FIELDS};
use super::validators::AppointmentValidator;
use crate::common::error::is_missing_reference;
use crate::common::{fields, object_to_form_data, ApiError, FormData, ValidationResult};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct AppointmentsService {
    db: SqlitePool,
}

impl AppointmentsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all appointments, earliest first
    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, date, time, pet_id, vet_id FROM appointments ORDER BY date ASC, time ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(appointments)
    }

    pub async fn get_appointment_by_id(&self, appointment_id: i64) -> Result<Appointment, ApiError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT id, date, time, pet_id, vet_id FROM appointments WHERE id = ?",
        )
        .bind(appointment_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))
    }

    pub async fn save_appointment(&self, form: &FormData) -> Result<Appointment, ApiError> {
        let (new_appointment, mut result) = match AppointmentValidator.draft(form) {
            Ok(new_appointment) => (Some(new_appointment), ValidationResult::new()),
            Err(result) => (None, result),
        };

        self.check_references(
            fields::parse_id(form.value("pet")),
            fields::parse_id(form.value("vet")),
            &mut result,
        )
        .await?;

        let new_appointment = match new_appointment {
            Some(new_appointment) if result.is_valid => new_appointment,
            _ => {
                warn!(errors = ?result.field_errors(), "Rejected appointment form");
                return Err(ApiError::from(result));
            }
        };

        let appointment_id = self.insert_appointment(&new_appointment).await?;

        info!(
            appointment_id,
            pet_id = new_appointment.pet_id,
            vet_id = new_appointment.vet_id,
            date = %new_appointment.date,
            "Created appointment"
        );

        self.get_appointment_by_id(appointment_id).await
    }

    pub(super) async fn insert_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> Result<i64, ApiError> {
        let inserted = sqlx::query(
            "INSERT INTO appointments (date, time, pet_id, vet_id) VALUES (?, ?, ?, ?)",
        )
        .bind(new_appointment.date)
        .bind(new_appointment.time)
        .bind(new_appointment.pet_id)
        .bind(new_appointment.vet_id)
        .execute(&self.db)
        .await;

        match inserted {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) => Err(self
                .refused_write(Some(new_appointment.pet_id), new_appointment.vet_id, e)
                .await),
        }
    }

    /// Reschedule or reassign an appointment; blank values keep the stored value
    pub async fn update_appointment(
        &self,
        appointment_id: i64,
        form: &FormData,
    ) -> Result<Appointment, ApiError> {
        let current = self.get_appointment_by_id(appointment_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &APPOINTMENT_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewAppointment {
            date, time, vet_id, ..
        } = AppointmentValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(appointment_id, errors = ?result.field_errors(), "Rejected appointment update");
            ApiError::from(result)
        })?;

        if vet_id != current.vet_id {
            let mut result = ValidationResult::new();
            self.check_references(None, Some(vet_id), &mut result).await?;
            if !result.is_valid {
                warn!(appointment_id, vet_id, "Rejected reassignment to unknown vet");
                return Err(ApiError::from(result));
            }
        }

        let updated =
            sqlx::query("UPDATE appointments SET date = ?, time = ?, vet_id = ? WHERE id = ?")
                .bind(date)
                .bind(time)
                .bind(vet_id)
                .bind(appointment_id)
                .execute(&self.db)
                .await;
        if let Err(e) = updated {
            return Err(self.refused_write(None, vet_id, e).await);
        }

        info!(appointment_id, fields = ?supplied, "Updated appointment");

        self.get_appointment_by_id(appointment_id).await
    }

    pub async fn delete_appointment(&self, appointment_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(appointment_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Appointment not found".to_string()));
        }

        info!(appointment_id, "Deleted appointment");

        Ok(())
    }

    /// Adds an error for every referenced pet or vet that does not exist
    async fn check_references(
        &self,
        pet_id: Option<i64>,
        vet_id: Option<i64>,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        if let Some(pet_id) = pet_id {
            if !self.row_exists("SELECT id FROM pets WHERE id = ?", pet_id).await? {
                result.add_error("pet", "La mascota seleccionada no existe");
            }
        }

        if let Some(vet_id) = vet_id {
            if !self.row_exists("SELECT id FROM vets WHERE id = ?", vet_id).await? {
                result.add_error("vet", "El veterinario seleccionado no existe");
            }
        }

        Ok(())
    }

    /// Maps a foreign key refusal back to the field errors of the rows that went missing
    async fn refused_write(&self, pet_id: Option<i64>, vet_id: i64, error: sqlx::Error) -> ApiError {
        if !is_missing_reference(&error) {
            return ApiError::DatabaseError(error);
        }

        let mut result = ValidationResult::new();
        if let Err(e) = self.check_references(pet_id, Some(vet_id), &mut result).await {
            return e;
        }

        if result.is_valid {
            ApiError::DatabaseError(error)
        } else {
            warn!(errors = ?result.field_errors(), "Reference vanished before the appointment was stored");
            ApiError::from(result)
        }
    }

    async fn row_exists(&self, query: &str, id: i64) -> Result<bool, ApiError> {
        let row: Option<(i64,)> = sqlx::query_as(query)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(row.is_some())
    }
}
