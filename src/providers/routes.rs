use super::handlers;
use super::validators::ProviderValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the providers router
pub fn providers_routes() -> Router {
    Router::new()
        .route(
            "/api/providers",
            get(handlers::get_providers).post(handlers::create_provider),
        )
        .route("/api/validate/providers", post(validate_form::<ProviderValidator>))
        .route(
            "/api/providers/:id",
            get(handlers::get_provider_by_id)
                .put(handlers::update_provider)
                .delete(handlers::delete_provider),
        )
        .route("/api/providers/:id/form", get(handlers::get_provider_form))
}
