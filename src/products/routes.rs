use super::handlers;
use super::validators::ProductValidator;
use crate::common::responses::validate_form;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the products router
pub fn products_routes() -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::get_products).post(handlers::create_product),
        )
        .route("/api/validate/products", post(validate_form::<ProductValidator>))
        .route(
            "/api/products/:id",
            get(handlers::get_product_by_id)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/api/products/:id/form", get(handlers::get_product_form))
}
