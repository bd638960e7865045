use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest, ProductRow},
};

fn from_row(row: ProductRow) -> Result<Product> {
    Product::try_from(row)
        .map_err(|e| AppError::InternalError(format!("Corrupt images column: {}", e)))
}

fn encode_images(images: &[String]) -> Result<String> {
    serde_json::to_string(images)
        .map_err(|e| AppError::InternalError(format!("Failed to encode images: {}", e)))
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>("SELECT * FROM products ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(from_row).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(from_row).transpose()
}

pub async fn create(pool: &SqlitePool, payload: &ProductRequest) -> Result<Product> {
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now();
    let images = encode_images(&payload.images)?;

    sqlx::query(
        "INSERT INTO products
            (id, name, brand, original_price, offer_price, description,
             images, is_featured, quality, category, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(&id)
    .bind(&payload.name)
    .bind(&payload.brand)
    .bind(payload.original_price)
    .bind(payload.offer_price)
    .bind(&payload.description)
    .bind(&images)
    .bind(payload.is_featured)
    .bind(&payload.quality)
    .bind(&payload.category)
    .bind(created_at)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created product vanished".to_string()))
}

/// Id and `created_at` are immutable; everything else is replaced.
pub async fn update(pool: &SqlitePool, id: &str, payload: &ProductRequest) -> Result<Product> {
    let images = encode_images(&payload.images)?;

    let result = sqlx::query(
        "UPDATE products
         SET name = $1, brand = $2, original_price = $3, offer_price = $4,
             description = $5, images = $6, is_featured = $7, quality = $8,
             category = $9
         WHERE id = $10",
    )
    .bind(&payload.name)
    .bind(&payload.brand)
    .bind(payload.original_price)
    .bind(payload.offer_price)
    .bind(&payload.description)
    .bind(&images)
    .bind(payload.is_featured)
    .bind(&payload.quality)
    .bind(&payload.category)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
}

/// Hard delete. Deleting an absent id is an error, not a no-op.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    Ok(())
}
