use super::handlers;
use super::validators::PetValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the pets router
pub fn pets_routes() -> Router {
    Router::new()
        .route("/api/pets", get(handlers::get_pets).post(handlers::create_pet))
        .route("/api/validate/pets", post(validate_form::<PetValidator>))
        .route(
            "/api/pets/:id",
            get(handlers::get_pet_by_id)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
        .route("/api/pets/:id/form", get(handlers::get_pet_form))
        .route(
            "/api/pets/:id/appointments",
            get(handlers::get_pet_appointments),
        )
}
