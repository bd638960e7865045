use chrono::Utc;

use crate::models::Product;

pub fn product(
    id: &str,
    name: &str,
    brand: &str,
    offer_price: f64,
    quality: &str,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        original_price: offer_price,
        offer_price,
        description: String::new(),
        images: vec!["/uploads/placeholder.jpg".to_string()],
        is_featured: false,
        quality: quality.to_string(),
        category: category.to_string(),
        created_at: Utc::now(),
    }
}
