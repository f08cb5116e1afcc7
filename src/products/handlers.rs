use super::services::ProductsService;
use crate::common::{object_to_form_data, ApiError, FormData, MessageResponse, SharedState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/products - Get all products
pub async fn get_products(
    Extension(state): Extension<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    let products = products_service.get_all_products().await?;

    Ok(Json(products))
}

/// POST /api/products - Create a new product
pub async fn create_product(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    let product = products_service
        .save_product(&FormData::from_json(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/:id - Get product by ID
pub async fn get_product_by_id(
    Extension(state): Extension<SharedState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    let product = products_service.get_product_by_id(product_id).await?;

    Ok(Json(product))
}

/// GET /api/products/:id/form - Product as edit-form values
pub async fn get_product_form(
    Extension(state): Extension<SharedState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    let product = products_service.get_product_by_id(product_id).await?;

    Ok(Json(object_to_form_data(&product)?))
}

/// PUT /api/products/:id - Update product
pub async fn update_product(
    Extension(state): Extension<SharedState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    let product = products_service
        .update_product(product_id, &FormData::from_json(payload))
        .await?;

    Ok(Json(product))
}

/// DELETE /api/products/:id - Delete product
pub async fn delete_product(
    Extension(state): Extension<SharedState>,
    Path(product_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let products_service = ProductsService::new(app_state.db.clone());

    products_service.delete_product(product_id).await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
