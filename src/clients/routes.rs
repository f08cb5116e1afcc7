use super::handlers;
use super::validators::ClientValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the clients router
pub fn clients_routes() -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::get_clients).post(handlers::create_client),
        )
        .route("/api/validate/clients", post(validate_form::<ClientValidator>))
        .route(
            "/api/clients/:id",
            get(handlers::get_client_by_id)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route("/api/clients/:id/form", get(handlers::get_client_form))
        .route("/api/clients/:id/pets", get(handlers::get_client_pets))
}
