use super::models::{Client, NewClient, CLIENT_MUTABLE_FIELDS};
use super::validators::ClientValidator;
use crate::common::{object_to_form_data, safe_email_log, safe_phone_log, ApiError, FormData};
use crate::pets::models::Pet;
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct ClientsService {
    db: SqlitePool,
}

impl ClientsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all clients
    pub async fn get_all_clients(&self) -> Result<Vec<Client>, ApiError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, address, email FROM clients ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(clients)
    }

    /// Get client by ID
    pub async fn get_client_by_id(&self, client_id: i64) -> Result<Client, ApiError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, address, email FROM clients WHERE id = ?",
        )
        .bind(client_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Client not found".to_string()))
    }

    /// Validate and store a new client; nothing is written when a field is invalid
    pub async fn save_client(&self, form: &FormData) -> Result<Client, ApiError> {
        let new_client = ClientValidator.draft(form).map_err(|result| {
            warn!(errors = ?result.field_errors(), "Rejected client form");
            ApiError::from(result)
        })?;

        let client_id = sqlx::query(
            "INSERT INTO clients (name, phone, address, email) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_client.name)
        .bind(&new_client.phone)
        .bind(&new_client.address)
        .bind(&new_client.email)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .last_insert_rowid();

        info!(
            client_id,
            email = %safe_email_log(&new_client.email),
            phone = %safe_phone_log(&new_client.phone),
            "Created client"
        );

        self.get_client_by_id(client_id).await
    }

    /// Merge the supplied fields over the stored client.
    ///
    /// Blank values keep the stored value; an invalid value rejects the update.
    pub async fn update_client(&self, client_id: i64, form: &FormData) -> Result<Client, ApiError> {
        let current = self.get_client_by_id(client_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &CLIENT_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewClient {
            name,
            phone,
            address,
            email,
        } = ClientValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(client_id, errors = ?result.field_errors(), "Rejected client update");
            ApiError::from(result)
        })?;

        sqlx::query("UPDATE clients SET name = ?, phone = ?, address = ?, email = ? WHERE id = ?")
            .bind(&name)
            .bind(&phone)
            .bind(&address)
            .bind(&email)
            .bind(client_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(client_id, fields = ?supplied, "Updated client");

        self.get_client_by_id(client_id).await
    }

    /// Delete a client together with its pets and their appointments
    pub async fn delete_client(&self, client_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(client_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Client not found".to_string()));
        }

        info!(client_id, "Deleted client");

        Ok(())
    }

    /// Pets owned by a client
    pub async fn get_client_pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError> {
        self.get_client_by_id(client_id).await?;

        let pets = sqlx::query_as::<_, Pet>(
            "SELECT id, name, breed, birthday, client_id FROM pets WHERE client_id = ? ORDER BY name ASC",
        )
        .bind(client_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(pets)
    }
}
