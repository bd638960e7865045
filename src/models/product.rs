use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::SortOption;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub original_price: f64,
    pub offer_price: f64,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub quality: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape as persisted: `images` is a JSON-array string column.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub original_price: f64,
    pub offer_price: f64,
    pub description: String,
    pub images: String,
    pub is_featured: bool,
    pub quality: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = serde_json::Error;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let images: Vec<String> = serde_json::from_str(&row.images)?;

        Ok(Product {
            id: row.id,
            name: row.name,
            brand: row.brand,
            original_price: row.original_price,
            offer_price: row.offer_price,
            description: row.description,
            images,
            is_featured: row.is_featured,
            quality: row.quality,
            category: row.category,
            created_at: row.created_at,
        })
    }
}

/// Create/update payload: a product without its server-assigned fields.
///
/// `offer_price <= original_price` is a client-side convention and is
/// deliberately not validated here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub brand: String,
    pub original_price: f64,
    pub offer_price: f64,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub quality: String,
    pub category: String,
}

/// Query parameters for `GET /products/search`. Set-valued dimensions
/// arrive as comma-separated lists.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub query: Option<String>,
    pub brands: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub qualities: Option<String>,
    pub categories: Option<String>,
    pub sort: Option<SortOption>,
}
