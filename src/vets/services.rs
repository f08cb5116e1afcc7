use super::models::{NewVet, Vet, VET_MUTABLE_FIELDS};
use super::validators::VetValidator;
use crate::common::{object_to_form_data, safe_email_log, ApiError, FormData};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct VetsService {
    db: SqlitePool,
}

impl VetsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_vets(&self) -> Result<Vec<Vet>, ApiError> {
        let vets = sqlx::query_as::<_, Vet>(
            "SELECT id, name, email, phone FROM vets ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(vets)
    }

    pub async fn get_vet_by_id(&self, vet_id: i64) -> Result<Vet, ApiError> {
        sqlx::query_as::<_, Vet>("SELECT id, name, email, phone FROM vets WHERE id = ?")
            .bind(vet_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Vet not found".to_string()))
    }

    pub async fn save_vet(&self, form: &FormData) -> Result<Vet, ApiError> {
        let new_vet = VetValidator.draft(form).map_err(|result| {
            warn!(errors = ?result.field_errors(), "Rejected vet form");
            ApiError::from(result)
        })?;

        let vet_id = sqlx::query("INSERT INTO vets (name, email, phone) VALUES (?, ?, ?)")
            .bind(&new_vet.name)
            .bind(&new_vet.email)
            .bind(&new_vet.phone)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .last_insert_rowid();

        info!(vet_id, email = %safe_email_log(&new_vet.email), "Created vet");

        self.get_vet_by_id(vet_id).await
    }

    pub async fn update_vet(&self, vet_id: i64, form: &FormData) -> Result<Vet, ApiError> {
        let current = self.get_vet_by_id(vet_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &VET_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewVet { name, email, phone } = VetValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(vet_id, errors = ?result.field_errors(), "Rejected vet update");
            ApiError::from(result)
        })?;

        sqlx::query("UPDATE vets SET name = ?, email = ?, phone = ? WHERE id = ?")
            .bind(&name)
            .bind(&email)
            .bind(&phone)
            .bind(vet_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(vet_id, fields = ?supplied, "Updated vet");

        self.get_vet_by_id(vet_id).await
    }

    /// Delete a vet; appointments assigned to them are removed as well
    pub async fn delete_vet(&self, vet_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM vets WHERE id = ?")
            .bind(vet_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Vet not found".to_string()));
        }

        info!(vet_id, "Deleted vet");

        Ok(())
    }
}
