use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    catalog::{self, FilterSpec},
    error::{AppError, Result},
    models::{CatalogQuery, Product},
    queries::product_queries,
    AppState,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Server-side evaluation of the catalog engine over the full product
/// list, for clients that do not hold a snapshot of their own.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list(&state.db).await?;

    let filter = FilterSpec {
        search_query: params.query.unwrap_or_default(),
        brands: split_csv(params.brands.as_deref()),
        price_range: (
            params.min_price.unwrap_or(0.0),
            params.max_price.unwrap_or(f64::INFINITY),
        ),
        qualities: split_csv(params.qualities.as_deref()),
        categories: split_csv(params.categories.as_deref()),
    };

    let result = catalog::apply(&products, &filter, params.sort.unwrap_or_default());

    Ok(Json(result))
}

pub async fn related_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let subject = product_queries::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let products = product_queries::list(&state.db).await?;

    Ok(Json(catalog::rank(&products, &subject)))
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
