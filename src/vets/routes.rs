use super::handlers;
use super::validators::VetValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the vets router
pub fn vets_routes() -> Router {
    Router::new()
        .route(
            "/api/vets",
            get(handlers::get_vets).post(handlers::create_vet),
        )
        .route("/api/validate/vets", post(validate_form::<VetValidator>))
        .route(
            "/api/vets/:id",
            get(handlers::get_vet_by_id)
                .put(handlers::update_vet)
                .delete(handlers::delete_vet),
        )
        .route("/api/vets/:id/form", get(handlers::get_vet_form))
}
