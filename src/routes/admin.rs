use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::Result,
    models::{Product, ProductRequest},
    queries::product_queries,
    AppState,
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = product_queries::create(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let product = product_queries::update(&state.db, &id, &payload).await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    product_queries::delete(&state.db, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
