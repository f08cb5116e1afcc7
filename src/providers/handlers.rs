use super::services::ProvidersService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/providers - Get all providers
pub async fn get_providers(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    let providers = providers_service.get_all_providers().await?;

    Ok(Json(providers))
}

/// POST /api/providers - Create a new provider
pub async fn create_provider(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    let provider = providers_service
        .save_provider(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(provider)))
}

/// GET /api/providers/:id - Get provider by ID
pub async fn get_provider_by_id(
    Extension(state): Extension<SharedState>,
    Path(provider_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    let provider = providers_service.get_provider_by_id(provider_id).await?;

    Ok(Json(provider))
}

/// GET /api/providers/:id/form - Provider as edit-form values
pub async fn get_provider_form(
    Extension(state): Extension<SharedState>,
    Path(provider_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    let provider = providers_service.get_provider_by_id(provider_id).await?;

    Ok(Json(object_to_form_data(&provider)?))
}

/// PUT /api/providers/:id - Update provider
pub async fn update_provider(
    Extension(state): Extension<SharedState>,
    Path(provider_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    let provider = providers_service
        .update_provider(provider_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(provider))
}

/// DELETE /api/providers/:id - Delete provider
pub async fn delete_provider(
    Extension(state): Extension<SharedState>,
    Path(provider_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let providers_service = ProvidersService::new(app_state.db.clone());

    providers_service.delete_provider(provider_id).await?;

    Ok(Json(MessageResponse {
        message: "Provider deleted successfully".to_string(),
    }))
}
