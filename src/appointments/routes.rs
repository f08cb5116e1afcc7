use super::handlers;
use super::validators::AppointmentValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the appointments router
pub fn appointments_routes() -> Router {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::get_appointments).post(handlers::create_appointment),
        )
        .route("/api/validate/appointments", post(validate_form::<AppointmentValidator>))
        .route(
            "/api/appointments/:id",
            get(handlers::get_appointment_by_id)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .route("/api/appointments/:id/form", get(handlers::get_appointment_form))
}
