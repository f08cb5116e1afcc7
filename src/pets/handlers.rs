use super::services::PetsService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/pets - Get all pets
pub async fn get_pets(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let pets = pets_service.get_all_pets().await?;

    Ok(Json(pets))
}

/// POST /api/pets - Create a new pet
pub async fn create_pet(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let pet = pets_service
        .save_pet(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /api/pets/:id - Get pet by ID
pub async fn get_pet_by_id(
    Extension(state): Extension<SharedState>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let pet = pets_service.get_pet_by_id(pet_id).await?;

    Ok(Json(pet))
}

/// GET /api/pets/:id/form - Pet as edit-form values
pub async fn get_pet_form(
    Extension(state): Extension<SharedState>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let pet = pets_service.get_pet_by_id(pet_id).await?;

    Ok(Json(object_to_form_data(&pet)?))
}

/// PUT /api/pets/:id - Update pet
pub async fn update_pet(
    Extension(state): Extension<SharedState>,
    Path(pet_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let pet = pets_service
        .update_pet(pet_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(pet))
}

/// DELETE /api/pets/:id - Delete pet
pub async fn delete_pet(
    Extension(state): Extension<SharedState>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    pets_service.delete_pet(pet_id).await?;

    Ok(Json(MessageResponse {
        message: "Pet deleted successfully".to_string(),
    }))
}

/// GET /api/pets/:id/appointments - Appointments booked for the pet
pub async fn get_pet_appointments(
    Extension(state): Extension<SharedState>,
    Path(pet_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let pets_service = PetsService::new(app_state.db.clone());

    let appointments = pets_service.get_pet_appointments(pet_id).await?;

    Ok(Json(appointments))
}
