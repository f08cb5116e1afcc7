use super::services::VetsService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/vets - Get all vets
pub async fn get_vets(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    let vets = vets_service.get_all_vets().await?;

    Ok(Json(vets))
}

/// POST /api/vets - Create a new vet
pub async fn create_vet(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    let vet = vets_service
        .save_vet(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vet)))
}

/// GET /api/vets/:id - Get vet by ID
pub async fn get_vet_by_id(
    Extension(state): Extension<SharedState>,
    Path(vet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    let vet = vets_service.get_vet_by_id(vet_id).await?;

    Ok(Json(vet))
}

/// GET /api/vets/:id/form - Vet as edit-form values
pub async fn get_vet_form(
    Extension(state): Extension<SharedState>,
    Path(vet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    let vet = vets_service.get_vet_by_id(vet_id).await?;

    Ok(Json(object_to_form_data(&vet)?))
}

/// PUT /api/vets/:id - Update vet
pub async fn update_vet(
    Extension(state): Extension<SharedState>,
    Path(vet_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    let vet = vets_service
        .update_vet(vet_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(vet))
}

/// DELETE /api/vets/:id - Delete vet
pub async fn delete_vet(
    Extension(state): Extension<SharedState>,
    Path(vet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let vets_service = VetsService::new(app_state.db.clone());

    vets_service.delete_vet(vet_id).await?;

    Ok(Json(MessageResponse {
        message: "Vet deleted successfully".to_string(),
    }))
}
