use super::models::{Medicine, NewMedicine, MEDICINE_MUTABLE_FIELDS};
use super::validators::MedicineValidator;
use crate::common::{object_to_form_data, ApiError, FormData};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct MedicinesService {
    db: SqlitePool,
}

impl MedicinesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        let medicines = sqlx::query_as::<_, Medicine>(
            "SELECT id, name, description, dose FROM medicines ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(medicines)
    }

    pub async fn get_medicine_by_id(&self, medicine_id: i64) -> Result<Medicine, ApiError> {
        sqlx::query_as::<_, Medicine>(
            "SELECT id, name, description, dose FROM medicines WHERE id = ?",
        )
        .bind(medicine_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Medicine not found".to_string()))
    }

    pub async fn save_medicine(&self, form: &FormData) -> Result<Medicine, ApiError> {
        let new_medicine = MedicineValidator.draft(form).map_err(|result| {
            warn!(errors = ?result.field_errors(), "Rejected medicine form");
            ApiError::from(result)
        })?;

        let medicine_id =
            sqlx::query("INSERT INTO medicines (name, description, dose) VALUES (?, ?, ?)")
                .bind(&new_medicine.name)
                .bind(&new_medicine.description)
                .bind(new_medicine.dose)
                .execute(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?
                .last_insert_rowid();

        info!(medicine_id, name = %new_medicine.name, "Created medicine");

        self.get_medicine_by_id(medicine_id).await
    }

    pub async fn update_medicine(
        &self,
        medicine_id: i64,
        form: &FormData,
    ) -> Result<Medicine, ApiError> {
        let current = self.get_medicine_by_id(medicine_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &MEDICINE_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewMedicine {
            name,
            description,
            dose,
        } = MedicineValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(medicine_id, errors = ?result.field_errors(), "Rejected medicine update");
            ApiError::from(result)
        })?;

        sqlx::query("UPDATE medicines SET name = ?, description = ?, dose = ? WHERE id = ?")
            .bind(&name)
            .bind(&description)
            .bind(dose)
            .bind(medicine_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(medicine_id, fields = ?supplied, "Updated medicine");

        self.get_medicine_by_id(medicine_id).await
    }

    pub async fn delete_medicine(&self, medicine_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM medicines WHERE id = ?")
            .bind(medicine_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Medicine not found".to_string()));
        }

        info!(medicine_id, "Deleted medicine");

        Ok(())
    }
}
