use super::models::{NewProvider, Provider, PROVIDER_MUTABLE_FIELDS};
use super::validators::ProviderValidator;
use crate::common::{object_to_form_data, safe_email_log, ApiError, FormData};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct ProvidersService {
    db: SqlitePool,
}

impl ProvidersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_providers(&self) -> Result<Vec<Provider>, ApiError> {
        let providers = sqlx::query_as::<_, Provider>(
            "SELECT id, name, email, address FROM providers ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(providers)
    }

    pub async fn get_provider_by_id(&self, provider_id: i64) -> Result<Provider, ApiError> {
        sqlx::query_as::<_, Provider>(
            "SELECT id, name, email, address FROM providers WHERE id = ?",
        )
        .bind(provider_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Provider not found".to_string()))
    }

    pub async fn save_provider(&self, form: &FormData) -> Result<Provider, ApiError> {
        let new_provider = ProviderValidator.draft(form).map_err(|result| {
            warn!(errors = ?result.field_errors(), "Rejected provider form");
            ApiError::from(result)
        })?;

        let provider_id =
            sqlx::query("INSERT INTO providers (name, email, address) VALUES (?, ?, ?)")
                .bind(&new_provider.name)
                .bind(&new_provider.email)
                .bind(&new_provider.address)
                .execute(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?
                .last_insert_rowid();

        info!(
            provider_id,
            email = %safe_email_log(&new_provider.email),
            "Created provider"
        );

        self.get_provider_by_id(provider_id).await
    }

    pub async fn update_provider(
        &self,
        provider_id: i64,
        form: &FormData,
    ) -> Result<Provider, ApiError> {
        let current = self.get_provider_by_id(provider_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &PROVIDER_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewProvider {
            name,
            email,
            address,
        } = ProviderValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(provider_id, errors = ?result.field_errors(), "Rejected provider update");
            ApiError::from(result)
        })?;

        sqlx::query("UPDATE providers SET name = ?, email = ?, address = ? WHERE id = ?")
            .bind(&name)
            .bind(&email)
            .bind(&address)
            .bind(provider_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(provider_id, fields = ?supplied, "Updated provider");

        self.get_provider_by_id(provider_id).await
    }

    pub async fn delete_provider(&self, provider_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(provider_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Provider not found".to_string()));
        }

        info!(provider_id, "Deleted provider");

        Ok(())
    }
}
