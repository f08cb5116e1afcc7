use super::models::{NewProduct, Product, PRODUCT_MUTABLE_FIELDS};
use super::validators::ProductValidator;
use crate::common::{object_to_form_data, ApiError, FormData};
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct ProductsService {
    db: SqlitePool,
}

impl ProductsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, product_type, price FROM products ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    pub async fn get_product_by_id(&self, product_id: i64) -> Result<Product, ApiError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, product_type, price FROM products WHERE id = ?",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
    }

    pub async fn save_product(&self, form: &FormData) -> Result<Product, ApiError> {
        let new_product = ProductValidator.draft(form).map_err(|result| {
            warn!(errors = ?result.field_errors(), "Rejected product form");
            ApiError::from(result)
        })?;

        let product_id =
            sqlx::query("INSERT INTO products (name, product_type, price) VALUES (?, ?, ?)")
                .bind(&new_product.name)
                .bind(&new_product.product_type)
                .bind(new_product.price)
                .execute(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?
                .last_insert_rowid();

        info!(product_id, name = %new_product.name, price = new_product.price, "Created product");

        self.get_product_by_id(product_id).await
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        form: &FormData,
    ) -> Result<Product, ApiError> {
        let current = self.get_product_by_id(product_id).await?;
        let (merged, supplied) =
            object_to_form_data(&current)?.merge_update(form, &PRODUCT_MUTABLE_FIELDS);

        if supplied.is_empty() {
            return Ok(current);
        }

        let NewProduct {
            name,
            product_type,
            price,
        } = ProductValidator.draft(&merged).map_err(|result| {
            let result = result.focus_on(&supplied);
            warn!(product_id, errors = ?result.field_errors(), "Rejected product update");
            ApiError::from(result)
        })?;

        sqlx::query("UPDATE products SET name = ?, product_type = ?, price = ? WHERE id = ?")
            .bind(&name)
            .bind(&product_type)
            .bind(price)
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(product_id, fields = ?supplied, "Updated product");

        self.get_product_by_id(product_id).await
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Product not found".to_string()));
        }

        info!(product_id, "Deleted product");

        Ok(())
    }
}
