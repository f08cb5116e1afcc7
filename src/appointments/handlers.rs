use super::services::AppointmentsService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/appointments - Get all appointments
pub async fn get_appointments(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    let appointments = appointments_service.get_all_appointments().await?;

    Ok(Json(appointments))
}

/// POST /api/appointments - Create a new appointment
pub async fn create_appointment(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    let appointment = appointments_service
        .save_appointment(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/appointments/:id - Get appointment by ID
pub async fn get_appointment_by_id(
    Extension(state): Extension<SharedState>,
    Path(appointment_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    let appointment = appointments_service.get_appointment_by_id(appointment_id).await?;

    Ok(Json(appointment))
}

/// GET /api/appointments/:id/form - Appointment as edit-form values
pub async fn get_appointment_form(
    Extension(state): Extension<SharedState>,
    Path(appointment_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    let appointment = appointments_service.get_appointment_by_id(appointment_id).await?;

    Ok(Json(object_to_form_data(&appointment)?))
}

/// PUT /api/appointments/:id - Update appointment
pub async fn update_appointment(
    Extension(state): Extension<SharedState>,
    Path(appointment_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    let appointment = appointments_service
        .update_appointment(appointment_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(appointment))
}

/// DELETE /api/appointments/:id - Delete appointment
pub async fn delete_appointment(
    Extension(state): Extension<SharedState>,
    Path(appointment_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let appointments_service = AppointmentsService::new(app_state.db.clone());

    appointments_service.delete_appointment(appointment_id).await?;

    Ok(Json(MessageResponse {
        message: "Appointment deleted successfully".to_string(),
    }))
}
