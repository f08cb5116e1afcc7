use super::services::MedicinesService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/medicines - Get all medicines
pub async fn get_medicines(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    let medicines = medicines_service.get_all_medicines().await?;

    Ok(Json(medicines))
}

/// POST /api/medicines - Create a new medicine
pub async fn create_medicine(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    let medicine = medicines_service
        .save_medicine(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(medicine)))
}

/// GET /api/medicines/:id - Get medicine by ID
pub async fn get_medicine_by_id(
    Extension(state): Extension<SharedState>,
    Path(medicine_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    let medicine = medicines_service.get_medicine_by_id(medicine_id).await?;

    Ok(Json(medicine))
}

/// GET /api/medicines/:id/form - Medicine as edit-form values
pub async fn get_medicine_form(
    Extension(state): Extension<SharedState>,
    Path(medicine_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    let medicine = medicines_service.get_medicine_by_id(medicine_id).await?;

    Ok(Json(object_to_form_data(&medicine)?))
}

/// PUT /api/medicines/:id - Update medicine
pub async fn update_medicine(
    Extension(state): Extension<SharedState>,
    Path(medicine_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    let medicine = medicines_service
        .update_medicine(medicine_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(medicine))
}

/// DELETE /api/medicines/:id - Delete medicine
pub async fn delete_medicine(
    Extension(state): Extension<SharedState>,
    Path(medicine_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let medicines_service = MedicinesService::new(app_state.db.clone());

    medicines_service.delete_medicine(medicine_id).await?;

    Ok(Json(MessageResponse {
        message: "Medicine deleted successfully".to_string(),
    }))
}
