use super::models::{NewPet, Pet, PET_MUTABLE_FIELDS};
use super::validators::PetValidator;
use crate::appointments::models::Appointment;
use crate::common::error::is_missing_reference;
use crate::common::{fields, object_to_form_data, ApiError, FormData, ValidationResult};
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;
use tracing::{info, warn};

const UNKNOWN_CLIENT: &str = "El cliente seleccionado no existe";

pub struct PetsService {
    db: SqlitePool,
    today: NaiveDate,
}

impl PetsService {
    pub fn new(db: SqlitePool) -> Self {
        Self::with_today(db, Local::now().date_naive())
    }

    /// Service whose birthday checks are evaluated against `today`
    pub fn with_today(db: SqlitePool, today: NaiveDate) -> Self {
        Self { db, today }
    }

    /// Get all pets
    pub async fn get_all_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let pets = sqlx::query_as::<_, Pet>(
            "SELECT id, name, breed, birthday, client_id FROM pets ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(pets)
    }

    /// Get pet by ID
    pub async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError> {
        sqlx::query_as::<_, Pet>(
            "SELECT id, name, breed, birthday, client_id FROM pets WHERE id = ?",
        )
        .bind(pet_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))
    }

    /// Validate and store a new pet for an existing client
    pub async fn save_pet(&self, form: &FormData) -> Result<Pet, ApiError> {
        let (new_pet, mut result) = match PetValidator::new(self.today).draft(form) {
            Ok(new_pet) => (Some(new_pet), ValidationResult::new()),
            Err(result) => (None, result),
        };

        if let Some(client_id) = fields::parse_id(form.value("client")) {
            self.check_client(client_id, &mut result).await?;
        }

        let new_pet = match new_pet {
            Some(new_pet) if result.is_valid => new_pet,
            _ => {
                warn!(errors = ?result.field_errors(), "Rejected pet form");
                return Err(ApiError::from(result));
            }
        };

        let pet_id = self.insert_pet(&new_pet).await?;

        info!(pet_id, client_id = new_pet.client_id, "Created pet");

        self.get_pet_by_id(pet_id).await
    }

    pub(super) async fn insert_pet(&self, new_pet: &NewPet) -> Result<i64, ApiError> {
        let inserted = sqlx::query(
            "INSERT INTO pets (name, breed, birthday, client_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_pet.name)
        .bind(&new_pet.breed)
        .bind(new_pet.birthday)
        .bind(new_pet.client_id)
        .execute(&self.db)
        .await;

        match inserted {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_missing_reference(&e) => {
                warn!(client_id = new_pet.client_id, "Owner vanished before the pet was stored");
                let mut result = ValidationResult::new();
                result.add_error("client", UNKNOWN_CLIENT);
                Err(ApiError::from(result))
            }
            Err(e) => Err(ApiError::DatabaseError(e)),
        }
    }

    /// Merge the supplied fields over the stored pet; blank values keep the stored value
    pub async fn update_pet(&self, pet_id: i64, form: &FormData) -> Result<Pet, ApiError> {
        let current = self.get_pet_by_id(pet_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &PET_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewPet {
            name,
            breed,
            birthday,
            ..
        } = PetValidator::new(self.today)
            .draft(&merged)
            .map_err(|result| {
                let result = result.focus_on(&supplied);
                warn!(pet_id, errors = ?result.field_errors(), "Rejected pet update");
                ApiError::from(result)
            })?;

        sqlx::query("UPDATE pets SET name = ?, breed = ?, birthday = ? WHERE id = ?")
            .bind(&name)
            .bind(&breed)
            .bind(birthday)
            .bind(pet_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(pet_id, fields = ?supplied, "Updated pet");

        self.get_pet_by_id(pet_id).await
    }

    /// Delete a pet; its appointments go with it
    pub async fn delete_pet(&self, pet_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(pet_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Pet not found".to_string()));
        }

        info!(pet_id, "Deleted pet");

        Ok(())
    }

    /// Appointments booked for a pet, earliest first
    pub async fn get_pet_appointments(&self, pet_id: i64) -> Result<Vec<Appointment>, ApiError> {
        self.get_pet_by_id(pet_id).await?;

        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, date, time, pet_id, vet_id FROM appointments WHERE pet_id = ? ORDER BY date ASC, time ASC",
        )
        .bind(pet_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(appointments)
    }

    async fn check_client(
        &self,
        client_id: i64,
        result: &mut ValidationResult,
    ) -> Result<(), ApiError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM clients WHERE id = ?")
            .bind(client_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if exists.is_none() {
            result.add_error("client", UNKNOWN_CLIENT);
        }

        Ok(())
    }
}
