use super::handlers;
use super::validators::MedicineValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the medicines router
pub fn medicines_routes() -> Router {
    Router::new()
        .route(
            "/api/medicines",
            get(handlers::get_medicines).post(handlers::create_medicine),
        )
        .route("/api/validate/medicines", post(validate_form::<MedicineValidator>))
        .route(
            "/api/medicines/:id",
            get(handlers::get_medicine_by_id)
                .put(handlers::update_medicine)
                .delete(handlers::delete_medicine),
        )
        .route("/api/medicines/:id/form", get(handlers::get_medicine_form))
}
