use super::services::ClientsService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/clients - Get all clients
pub async fn get_clients(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let clients = clients_service.get_all_clients().await?;

    Ok(Json(clients))
}

/// POST /api/clients - Create a new client
pub async fn create_client(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let client = clients_service
        .save_client(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients/:id - Get client by ID
pub async fn get_client_by_id(
    Extension(state): Extension<SharedState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let client = clients_service.get_client_by_id(client_id).await?;

    Ok(Json(client))
}

/// GET /api/clients/:id/form - Client as edit-form values
pub async fn get_client_form(
    Extension(state): Extension<SharedState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let client = clients_service.get_client_by_id(client_id).await?;

    Ok(Json(object_to_form_data(&client)?))
}

/// PUT /api/clients/:id - Update client
pub async fn update_client(
    Extension(state): Extension<SharedState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let client = clients_service
        .update_client(client_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(client))
}

/// DELETE /api/clients/:id - Delete client
pub async fn delete_client(
    Extension(state): Extension<SharedState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    clients_service.delete_client(client_id).await?;

    Ok(Json(MessageResponse {
        message: "Client deleted successfully".to_string(),
    }))
}

/// GET /api/clients/:id/pets - Pets owned by the client
pub async fn get_client_pets(
    Extension(state): Extension<SharedState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let clients_service = ClientsService::new(app_state.db.clone());

    let pets = clients_service.get_client_pets(client_id).await?;

    Ok(Json(pets))
}
